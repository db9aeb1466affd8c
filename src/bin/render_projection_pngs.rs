#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_ROOT: &str = "target/projection_png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_HOST_WIDTH: u32 = 720;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    inputs_path: Option<PathBuf>,
    output_root: PathBuf,
    host_width: u32,
    device_pixel_ratio: f64,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = savings_projection::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use savings_projection::api::{ChartKind, ProjectionInputs, ProjectionSession};
    use savings_projection::core::SurfaceLayout;
    use savings_projection::render::CairoRenderer;

    let args = parse_args()?;
    let inputs = match &args.inputs_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read inputs `{}`: {err}", path.display()))?;
            ProjectionInputs::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ProjectionInputs::default(),
    };

    let mut session = ProjectionSession::new();
    session.compute(&inputs).map_err(|err| match err {
        savings_projection::ProjectionError::Validation(validation) => {
            format!("{} ({validation})", validation.user_message())
        }
        other => other.to_string(),
    })?;

    fs::create_dir_all(&args.output_root).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_root.display()
        )
    })?;

    let layout = SurfaceLayout::for_host_width(args.host_width, args.device_pixel_ratio);
    let mut renderer = CairoRenderer::new(layout).map_err(|err| err.to_string())?;
    for kind in ChartKind::ALL {
        session
            .render_chart(kind, layout, &mut renderer)
            .map_err(|err| format!("failed to render `{}`: {err}", kind.as_str()))?;
        let path = args.output_root.join(format!("{}.png", kind.as_str()));
        renderer
            .write_png(&path)
            .map_err(|err| err.to_string())?;
        println!("wrote {}", path.display());
    }

    for card in session.summary_cards() {
        println!("{}: {}", card.title, card.value);
    }
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut inputs_path = None;
    let mut output_root = PathBuf::from(DEFAULT_OUTPUT_ROOT);
    let mut host_width = DEFAULT_HOST_WIDTH;
    let mut device_pixel_ratio = 1.0;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--inputs" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --inputs".to_owned())?;
                inputs_path = Some(PathBuf::from(value));
            }
            "--output-root" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-root".to_owned())?;
                output_root = PathBuf::from(value);
            }
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                host_width = value
                    .parse()
                    .map_err(|err| format!("invalid --width `{value}`: {err}"))?;
            }
            "--dpr" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --dpr".to_owned())?;
                device_pixel_ratio = value
                    .parse()
                    .map_err(|err| format!("invalid --dpr `{value}`: {err}"))?;
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        inputs_path,
        output_root,
        host_width,
        device_pixel_ratio,
    })
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "usage: render_projection_pngs [--inputs <file.json>] [--output-root <dir>] \
         [--width <css px>] [--dpr <ratio>]\n\
         defaults: built-in calculator inputs, output `{DEFAULT_OUTPUT_ROOT}`, \
         width {DEFAULT_HOST_WIDTH}, dpr 1"
    )
}
