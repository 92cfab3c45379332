//! List output formats

use mathpix_client::output::{FormatListResult, OutputMode};

/// Print every output format tag and the request entry it produces
pub fn formats(mode: OutputMode) {
    FormatListResult::all().render(mode);
}
