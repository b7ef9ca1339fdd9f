use log::info;
use std::path::Path;

use super::atomic::atomic_write;
use crate::error::Result;
use crate::types::MemoryImage;

/// Serialize `image` to `path`, one token per line. Creates or replaces the file;
/// an empty image yields an empty file.
pub fn write_memory_image(path: &Path, image: &MemoryImage) -> Result<()> {
    atomic_write(path, image.render().as_bytes())?;
    info!("wrote {} values to {}", image.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LiteralToken;
    use std::fs;

    #[test]
    fn test_writes_tokens_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memVal.mem");
        let image: MemoryImage = ["A", "3"].into_iter().map(LiteralToken::from).collect();

        write_memory_image(&path, &image).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "A\n3\n");
    }

    #[test]
    fn test_empty_image_is_zero_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memVal.mem");
        fs::write(&path, "stale\n").unwrap();

        write_memory_image(&path, &MemoryImage::new()).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }
}
