//! Input compression for the VCF passthrough.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Compression of a raw VCF input file.
pub enum Compression {
    None,
    Gz,
}

impl Compression {
    /// Detects compression from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("gz") => Compression::Gz,
            _ => Compression::None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Compression::None => "none",
            Compression::Gz => "gzip",
        }
    }

    pub fn get_decoder(
        &self,
        handle: File,
    ) -> anyhow::Result<Box<dyn Read>> {
        Ok(match self {
            Compression::Gz => {
                Box::new(flate2::read::MultiGzDecoder::new(handle))
            },
            Compression::None => Box::new(handle),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::GzEncoder;

    use super::*;

    #[test]
    fn extension_detection() {
        assert!(matches!(
            Compression::from_path("calls.vcf.gz"),
            Compression::Gz
        ));
        assert!(matches!(
            Compression::from_path("calls.vcf"),
            Compression::None
        ));
    }

    #[test]
    fn gzip_round_trip() -> anyhow::Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        let mut encoder =
            GzEncoder::new(file.reopen()?, flate2::Compression::default());
        encoder.write_all(b"#CHROM\tPOS\nchr1\t100\n")?;
        encoder.finish()?;

        let mut decoded = String::new();
        Compression::Gz
            .get_decoder(file.reopen()?)?
            .read_to_string(&mut decoded)?;
        assert_eq!(decoded, "#CHROM\tPOS\nchr1\t100\n");
        Ok(())
    }
}
