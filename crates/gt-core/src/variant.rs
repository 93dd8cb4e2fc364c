//! Named execution variants of the producing simulation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One of the three execution strategies being cross-validated.
///
/// The lowercase string form of each variant is also its output file name
/// under the producer's output directory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Serial,
    Dynamic,
    Static,
}

impl Variant {
    /// The variant treated as ground truth.
    pub const REFERENCE: Variant = Variant::Serial;

    /// Variants compared against the reference, in checking order.
    /// The first mismatch wins, so this order is load-bearing.
    pub const COMPARED: [Variant; 2] = [Variant::Dynamic, Variant::Static];

    /// Output file path for this variant under `out_dir`.
    pub fn path(self, out_dir: &Path) -> PathBuf {
        out_dir.join(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn names_match_producer_files() {
        assert_eq!(Variant::Serial.to_string(), "serial");
        assert_eq!(Variant::Dynamic.to_string(), "dynamic");
        assert_eq!(Variant::Static.to_string(), "static");
        assert_eq!(Variant::from_str("dynamic").unwrap(), Variant::Dynamic);
    }

    #[test]
    fn paths_join_the_output_directory() {
        let p = Variant::Static.path(Path::new("out"));
        assert_eq!(p, PathBuf::from("out/static"));
    }
}
