//! Mapping between raw byte columns and render columns
//!
//! A row's raw content is stored as bytes. Its render form expands every tab
//! to the next multiple of [`TAB_STOP`], so the cursor lives in two column
//! spaces at once: `cx` indexes raw bytes, `rx` indexes rendered cells.

/// Width of a tab stop in render columns
pub const TAB_STOP: usize = 8;

/// Render width of a raw byte that starts at render column `rx`
#[inline]
fn advance(byte: u8, rx: usize) -> usize {
    if byte == b'\t' {
        TAB_STOP - (rx % TAB_STOP)
    } else {
        1
    }
}

/// Convert a raw column into a render column.
///
/// `cx` past the end of `raw` is treated as the end of the row.
pub fn char_to_render(raw: &[u8], cx: usize) -> usize {
    raw.iter()
        .take(cx)
        .fold(0, |rx, &byte| rx + advance(byte, rx))
}

/// Convert a render column back into a raw column.
///
/// Returns the raw index whose cell span covers `rx`. A render column inside
/// a tab's expansion maps to the tab itself. Anything past the rendered width
/// clamps to `raw.len()`.
pub fn render_to_char(raw: &[u8], rx: usize) -> usize {
    let mut cur_rx = 0;
    for (cx, &byte) in raw.iter().enumerate() {
        cur_rx += advance(byte, cur_rx);
        if cur_rx > rx {
            return cx;
        }
    }
    raw.len()
}

/// Expand tabs into spaces, producing the render form of a row
pub fn expand_tabs(raw: &[u8]) -> Vec<u8> {
    let tabs = raw.iter().filter(|&&b| b == b'\t').count();
    let mut render = Vec::with_capacity(raw.len() + tabs * (TAB_STOP - 1));
    for &byte in raw {
        if byte == b'\t' {
            render.push(b' ');
            while render.len() % TAB_STOP != 0 {
                render.push(b' ');
            }
        } else {
            render.push(byte);
        }
    }
    render
}
