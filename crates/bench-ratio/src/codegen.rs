//! Generation of the `RATIO` source file.
use crate::error::RatioError;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Header placed at the top of the generated file.
pub const LICENSE_HEADER: &str = "\
// This file is part of Selendra.

// Copyright (C) 2020-2021 Selendra.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.
";

/// Returns the source text declaring `pub const RATIO: u64 = <ratio>;`.
pub fn render_ratio_source(ratio: u64) -> String {
    format!("{LICENSE_HEADER}\npub const RATIO: u64 = {ratio};\n")
}

/// Writes the generated source to `path`, replacing any existing file.
///
/// Relative paths are resolved against the current working directory.
/// Returns the path that was written.
pub fn write_ratio_source(path: &Path, ratio: u64) -> Result<PathBuf, RatioError> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|e| RatioError::io(path, e))?
            .join(path)
    };

    fs::write(&path, render_ratio_source(ratio)).map_err(|e| RatioError::io(&path, e))?;
    tracing::info!(path = %path.display(), ratio, "wrote ratio source");
    Ok(path)
}
