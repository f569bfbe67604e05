//! Input/output format pairs accepted by the TARDIS-em entry points.
//!
//! A choice is written `<input>_<output>`, e.g. `mrc_csv` reads MRC volumes
//! and writes CSV point clouds. `None` on either side means "not applicable".

use std::fmt;
use std::str::FromStr;

/// Input file formats, in listing order.
pub const INPUT_FORMATS: [&str; 5] = ["None", "am", "mrc", "tif", "npy"];

/// Output file formats, in listing order.
pub const OUTPUT_FORMATS: [&str; 8] = ["None", "am", "mrc", "tif", "npy", "amSG", "csv", "stl"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatChoice {
    input: &'static str,
    output: &'static str,
}

impl FormatChoice {
    pub fn input(&self) -> &'static str {
        self.input
    }

    pub fn output(&self) -> &'static str {
        self.output
    }
}

impl fmt::Display for FormatChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.input, self.output)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown format choice '{0}' (expected <input>_<output>, see `tardis_em formats`)")]
pub struct FormatChoiceError(pub String);

impl FromStr for FormatChoice {
    type Err = FormatChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || FormatChoiceError(s.to_string());
        // "amSG" contains no underscore, so the first one separates the pair.
        let (input, output) = s.split_once('_').ok_or_else(unknown)?;
        let input = INPUT_FORMATS
            .into_iter()
            .find(|candidate| *candidate == input)
            .ok_or_else(unknown)?;
        let output = OUTPUT_FORMATS
            .into_iter()
            .find(|candidate| *candidate == output)
            .ok_or_else(unknown)?;
        Ok(Self { input, output })
    }
}

/// All choices, input-major.
pub fn format_choices() -> Vec<FormatChoice> {
    INPUT_FORMATS
        .into_iter()
        .flat_map(|input| {
            OUTPUT_FORMATS
                .into_iter()
                .map(move |output| FormatChoice { input, output })
        })
        .collect()
}
