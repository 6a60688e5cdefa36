//! Command-line front end
//!
//! ```text
//! steglens <invert|blur|sharpen|edges|reveal|deficiency>
//!          [--size N] [--color red|green|blue|none] <input> <output>
//! ```
//!
//! The output encoder is chosen from the output file's extension
//! (`.png`, `.pnm`, `.pgm`, `.ppm`).

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use log::{debug, info};
use std::path::PathBuf;
use steglens_color::{ColorError, Deficiency, simulate_deficiency};
use steglens_core::{Image, RgbRaster};
use steglens_filter::{Filter, FilterError};
use steglens_io::{ImageFormat, IoError};

/// Environment variable holding the log specification.
pub const LOG_ENV: &str = "STEGLENS_LOG";

/// Kernel side used when `--size` is not given.
pub const DEFAULT_SIZE: u32 = 3;

/// Usage text printed on argument errors.
pub const USAGE: &str = "usage: steglens <invert|blur|sharpen|edges|reveal|deficiency> \
                         [--size N] [--color red|green|blue|none] <input> <output>";

/// Errors reported by the command-line tool
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad or missing command-line arguments
    #[error("invalid arguments: {0}")]
    Usage(String),

    /// Output path has no recognised image extension
    #[error("cannot infer output format from {0:?} (use .png, .pnm, .pgm or .ppm)")]
    UnknownOutputFormat(PathBuf),

    /// Image I/O failure
    #[error(transparent)]
    Io(#[from] IoError),

    /// Filter failure (for example an even sharpen size)
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Colour option failure
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Logger could not be started
    #[error("logger initialization failed: {0}")]
    Logger(#[from] FlexiLoggerError),
}

/// Result type for command-line operations
pub type CliResult<T> = Result<T, CliError>;

/// What the tool should do with the input image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply a grey-scale filter
    Filter(Filter),
    /// Reveal an image hidden in the low bits
    Reveal,
    /// Simulate a colour deficiency
    Deficiency(Deficiency),
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Operation to run
    pub command: Command,
    /// Image to read
    pub input: PathBuf,
    /// Image to write
    pub output: PathBuf,
}

impl Config {
    /// Parse arguments (without the program name).
    pub fn from_args<I, S>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut size = None;
        let mut deficiency = None;
        let mut positional = Vec::new();

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--size" | "-s" => {
                    let value = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--size needs a value".into()))?;
                    let n = value
                        .parse::<u32>()
                        .map_err(|_| CliError::Usage(format!("bad --size value {:?}", value)))?;
                    size = Some(n);
                }
                "--color" | "-c" => {
                    let value = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--color needs a value".into()))?;
                    deficiency = Some(value.parse::<Deficiency>()?);
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(CliError::Usage(format!("unknown option {:?}", flag)));
                }
                _ => positional.push(arg),
            }
        }

        let [name, input, output]: [String; 3] = positional.try_into().map_err(|p: Vec<String>| {
            CliError::Usage(format!(
                "expected <command> <input> <output>, got {} argument(s)",
                p.len()
            ))
        })?;

        let command = match name.as_str() {
            "invert" => Command::Filter(Filter::Invert),
            "blur" => Command::Filter(Filter::Blur(size.unwrap_or(DEFAULT_SIZE))),
            "sharpen" => Command::Filter(Filter::Sharpen(size.unwrap_or(DEFAULT_SIZE))),
            "edges" => Command::Filter(Filter::Edges),
            "reveal" => Command::Reveal,
            "deficiency" => Command::Deficiency(deficiency.unwrap_or(Deficiency::None)),
            other => return Err(CliError::Usage(format!("unknown command {:?}", other))),
        };

        // Options only apply to the commands that read them
        let takes_size = matches!(command, Command::Filter(Filter::Blur(_) | Filter::Sharpen(_)));
        if size.is_some() && !takes_size {
            return Err(CliError::Usage(format!("{} does not take --size", name)));
        }
        if deficiency.is_some() && !matches!(command, Command::Deficiency(_)) {
            return Err(CliError::Usage(format!("{} does not take --color", name)));
        }

        Ok(Config {
            command,
            input: input.into(),
            output: output.into(),
        })
    }

    /// Output encoder chosen from the output path's extension.
    pub fn output_format(&self) -> CliResult<ImageFormat> {
        ImageFormat::from_path(&self.output)
            .ok_or_else(|| CliError::UnknownOutputFormat(self.output.clone()))
    }
}

/// Start the logger; the level comes from `STEGLENS_LOG` (default `info`).
///
/// The returned handle must be kept alive for the duration of the program.
pub fn setup_logging() -> CliResult<LoggerHandle> {
    let spec = std::env::var(LOG_ENV).unwrap_or_else(|_| "info".to_string());
    Ok(Logger::try_with_str(spec)?.log_to_stderr().start()?)
}

/// Execute a parsed command line.
pub fn run(config: &Config) -> CliResult<()> {
    let format = config.output_format()?;
    debug!("run: {:?}", config);

    match config.command {
        Command::Filter(filter) => {
            let raster = steglens_io::read_gray(&config.input)?;
            let out = filter.apply(&raster)?;
            steglens_io::write_image(&out, &config.output, format)?;
        }
        Command::Reveal => match steglens_stego::reveal(&steglens_io::read_image(&config.input)?) {
            Image::Gray(raster) => steglens_io::write_image(&raster, &config.output, format)?,
            Image::Rgb(rgb) => steglens_io::write_rgb_image(&rgb, &config.output, format)?,
        },
        Command::Deficiency(deficiency) => {
            let rgb = match steglens_io::read_image(&config.input)? {
                Image::Gray(raster) => RgbRaster::from_gray(&raster),
                Image::Rgb(rgb) => rgb,
            };
            let out = simulate_deficiency(&rgb, deficiency);
            steglens_io::write_rgb_image(&out, &config.output, format)?;
        }
    }

    info!(
        "{} -> {}",
        config.input.display(),
        config.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters() {
        let config = Config::from_args(["blur", "--size", "5", "in.png", "out.png"]).unwrap();
        assert_eq!(config.command, Command::Filter(Filter::Blur(5)));
        assert_eq!(config.input, PathBuf::from("in.png"));
        assert_eq!(config.output, PathBuf::from("out.png"));

        let config = Config::from_args(["sharpen", "a.pgm", "b.pgm"]).unwrap();
        assert_eq!(config.command, Command::Filter(Filter::Sharpen(DEFAULT_SIZE)));

        let config = Config::from_args(["edges", "a.pgm", "b.pgm"]).unwrap();
        assert_eq!(config.command, Command::Filter(Filter::Edges));
    }

    #[test]
    fn test_parse_deficiency() {
        let config = Config::from_args(["deficiency", "-c", "green", "a.png", "b.png"]).unwrap();
        assert_eq!(config.command, Command::Deficiency(Deficiency::Green));

        let config = Config::from_args(["deficiency", "a.png", "b.png"]).unwrap();
        assert_eq!(config.command, Command::Deficiency(Deficiency::None));

        assert!(matches!(
            Config::from_args(["deficiency", "--color", "cyan", "a.png", "b.png"]),
            Err(CliError::Color(_))
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Config::from_args(["blur", "in.png"]), Err(CliError::Usage(_))));
        assert!(matches!(
            Config::from_args(["smudge", "a.png", "b.png"]),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            Config::from_args(["blur", "--size", "x", "a.png", "b.png"]),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            Config::from_args(["blur", "--size"]),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            Config::from_args(["blur", "--verbose", "a.png", "b.png"]),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unused_options() {
        for args in [
            ["edges", "--size", "5", "a.png", "b.png"],
            ["invert", "-s", "3", "a.png", "b.png"],
            ["reveal", "--size", "3", "a.png", "b.png"],
            ["deficiency", "--size", "3", "a.png", "b.png"],
            ["blur", "--color", "red", "a.png", "b.png"],
            ["reveal", "-c", "none", "a.png", "b.png"],
        ] {
            assert!(
                matches!(Config::from_args(args), Err(CliError::Usage(_))),
                "{:?}",
                args
            );
        }
    }

    #[test]
    fn test_output_format() {
        let config = Config::from_args(["invert", "a.png", "b.PGM"]).unwrap();
        assert_eq!(config.output_format().unwrap(), ImageFormat::Pnm);
        let config = Config::from_args(["invert", "a.png", "b.bmp"]).unwrap();
        assert!(matches!(
            config.output_format(),
            Err(CliError::UnknownOutputFormat(_))
        ));
    }
}
