//! Output Sinks & Render Context

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::CssError;
use crate::config::{Clock, RenderOptions, TIMESTAMP_FORMAT};
use crate::stylesheet::StyleId;

/// Where a rendered stylesheet goes
pub enum Output<'a> {
    /// Return the text
    Buffer,
    /// Create (or truncate) a file; the library opens and closes it
    Path(&'a Path),
    /// Caller-owned stream; flushed but never closed
    Writer(&'a mut dyn Write),
}

impl std::fmt::Debug for Output<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buffer => f.write_str("Buffer"),
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

impl<'a> From<&'a Path> for Output<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

/// State shared by every entry during one render pass
pub(crate) struct RenderContext<'a> {
    pub options: &'a RenderOptions,
    /// Origins of every looked-up style in the tree
    pub used: HashSet<StyleId>,
}

impl RenderContext<'_> {
    pub fn is_emitted(&self, origin: StyleId) -> bool {
        !self.options.dynamic || self.used.contains(&origin)
    }
}

pub(crate) fn header(clock: &dyn Clock) -> String {
    format!(
        "/* Made with violetear */\n/* Autogenerated on {} */\n\n",
        clock.now().format(TIMESTAMP_FORMAT)
    )
}

/// Hand rendered text to its destination
pub(crate) fn write_output(css: String, output: Output<'_>) -> Result<Option<String>, CssError> {
    match output {
        Output::Buffer => Ok(Some(css)),
        Output::Path(path) => {
            write_file(path, &css)?;
            tracing::info!("Wrote stylesheet to {} ({} bytes)", path.display(), css.len());
            Ok(None)
        }
        Output::Writer(writer) => {
            writer.write_all(css.as_bytes())?;
            writer.flush()?;
            Ok(None)
        }
    }
}

fn write_file(path: &Path, css: &str) -> Result<(), CssError> {
    let failure = |source| CssError::SinkWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    // The handle is dropped, and so closed, on every return path
    let mut writer = BufWriter::new(File::create(path).map_err(failure)?);
    writer.write_all(css.as_bytes()).map_err(failure)?;
    writer.flush().map_err(failure)
}
