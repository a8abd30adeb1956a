use std::fs;
use std::path::Path;

use crate::Result;

/// Copy the static-assets subtree verbatim into the output directory.
/// Returns the number of files copied; a missing source is zero files.
pub fn copy_static(src_dir: &Path, dest_dir: &Path) -> Result<usize> {
    if !src_dir.is_dir() {
        return Ok(0);
    }

    let mut count = 0;
    copy_dir_recursive(src_dir, dest_dir, &mut count)?;
    Ok(count)
}

fn copy_dir_recursive(src_dir: &Path, dest_dir: &Path, count: &mut usize) -> Result<()> {
    fs::create_dir_all(dest_dir)?;

    for entry in fs::read_dir(src_dir)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dest_path, count)?;
        } else {
            fs::copy(&src_path, &dest_path)?;
            *count += 1;
        }
    }

    Ok(())
}
