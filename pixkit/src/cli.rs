//! Command-line parsing and dispatch
//!
//! ```text
//! pixkit <input> <mode> [params...] <output>
//!
//!   -median <size>         median filter, odd window size
//!   -gaus <size> <sigma>   Gaussian blur
//!   -rotate <degrees>      rotation about the centre
//!   -resize <sx> <sy>      bicubic resize by factors
//!   -edge                  Laplacian edge detection
//!   -sharp                 sharpening
//!   -gray                  grayscale reduction
//!   -hist                  histogram equalization
//! ```

use crate::{Error, Result};
use pixkit_core::{ImageFormat, PixelBuffer};
use pixkit_io::IoError;
use pixkit_filter::{edge_detect, equalize_histogram, gaussian_blur, median_filter, sharpen};
use pixkit_transform::{rotate, scale};
use std::path::PathBuf;
use std::str::FromStr;

/// Usage summary printed on bad arguments.
pub const USAGE: &str = "pixkit <input> <mode> [params...] <output>
modes: -median <size> | -gaus <size> <sigma> | -rotate <degrees> |
       -resize <sx> <sy> | -edge | -sharp | -gray | -hist";

/// One filter selected on the command line, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Median { size: u32 },
    Gaussian { size: u32, sigma: f64 },
    Rotate { degrees: f64 },
    Resize { scale_x: f64, scale_y: f64 },
    Edge,
    Sharpen,
    Gray,
    Equalize,
}

impl Operation {
    /// Run the operation, consuming the input buffer.
    pub fn apply(self, mut buf: PixelBuffer) -> Result<PixelBuffer> {
        Ok(match self {
            Operation::Median { size } => median_filter(&buf, size)?,
            Operation::Gaussian { size, sigma } => gaussian_blur(&buf, size, sigma)?,
            Operation::Rotate { degrees } => rotate(&buf, degrees)?,
            Operation::Resize { scale_x, scale_y } => scale(&buf, scale_x, scale_y)?,
            Operation::Edge => edge_detect(&buf)?,
            Operation::Sharpen => sharpen(&buf)?,
            Operation::Gray => {
                buf.convert_to_gray_in_place();
                buf
            }
            Operation::Equalize => {
                equalize_histogram(&mut buf)?;
                buf
            }
        })
    }

    /// Mode flag that selects this operation.
    pub fn flag(&self) -> &'static str {
        match self {
            Operation::Median { .. } => "-median",
            Operation::Gaussian { .. } => "-gaus",
            Operation::Rotate { .. } => "-rotate",
            Operation::Resize { .. } => "-resize",
            Operation::Edge => "-edge",
            Operation::Sharpen => "-sharp",
            Operation::Gray => "-gray",
            Operation::Equalize => "-hist",
        }
    }
}

/// A fully parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub input: PathBuf,
    pub operation: Operation,
    pub output: PathBuf,
}

/// Parse the arguments that follow the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let owned: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    let args: Vec<&str> = owned.iter().map(String::as_str).collect();
    let [input, mode, rest @ ..] = args.as_slice() else {
        return Err(Error::Usage(USAGE.to_string()));
    };
    let Some((output, params)) = rest.split_last() else {
        return Err(Error::Usage(format!("missing output path\n{USAGE}")));
    };

    if ImageFormat::from_path(output) == ImageFormat::Unknown {
        return Err(Error::Io(IoError::UnsupportedFormat(format!(
            "cannot infer output format from '{output}'"
        ))));
    }

    let operation = match *mode {
        "-median" => {
            let [size] = expect_params::<1>(mode, params)?;
            Operation::Median {
                size: parse_param(mode, "size", size)?,
            }
        }
        "-gaus" => {
            let [size, sigma] = expect_params::<2>(mode, params)?;
            Operation::Gaussian {
                size: parse_param(mode, "size", size)?,
                sigma: parse_param(mode, "sigma", sigma)?,
            }
        }
        "-rotate" => {
            let [degrees] = expect_params::<1>(mode, params)?;
            Operation::Rotate {
                degrees: parse_param(mode, "degrees", degrees)?,
            }
        }
        "-resize" => {
            let [sx, sy] = expect_params::<2>(mode, params)?;
            Operation::Resize {
                scale_x: parse_param(mode, "sx", sx)?,
                scale_y: parse_param(mode, "sy", sy)?,
            }
        }
        "-edge" => {
            let [] = expect_params::<0>(mode, params)?;
            Operation::Edge
        }
        "-sharp" => {
            let [] = expect_params::<0>(mode, params)?;
            Operation::Sharpen
        }
        "-gray" => {
            let [] = expect_params::<0>(mode, params)?;
            Operation::Gray
        }
        "-hist" => {
            let [] = expect_params::<0>(mode, params)?;
            Operation::Equalize
        }
        other => {
            return Err(Error::Usage(format!("unknown mode '{other}'\n{USAGE}")));
        }
    };

    Ok(Command {
        input: PathBuf::from(*input),
        operation,
        output: PathBuf::from(*output),
    })
}

/// Read the input, apply the operation and write the output.
///
/// The output extension is checked before the input is decoded.
pub fn run(command: &Command) -> Result<()> {
    if ImageFormat::from_path(&command.output) == ImageFormat::Unknown {
        return Err(Error::Io(IoError::UnsupportedFormat(format!(
            "cannot infer output format from '{}'",
            command.output.display()
        ))));
    }
    let buf = pixkit_io::read_image(&command.input)?;
    let out = command.operation.apply(buf)?;
    pixkit_io::write_image(&out, &command.output)?;
    Ok(())
}

fn expect_params<'a, const N: usize>(mode: &str, params: &[&'a str]) -> Result<[&'a str; N]> {
    params.try_into().map_err(|_| {
        Error::Usage(format!(
            "{mode} takes {N} parameter(s), got {}\n{USAGE}",
            params.len()
        ))
    })
}

fn parse_param<T: FromStr>(mode: &str, name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Usage(format!("{mode}: invalid {name} '{value}'")))
}
