//! Cleanup applied to model output before it is returned.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static LEADING_HTML_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```html\n?").expect("leading fence pattern is valid"));

// `$` without the multi-line flag only matches at the very end of the input.
static TRAILING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```$").expect("trailing fence pattern is valid"));

/// Drop one ```` ```html ```` fence at the start and one ```` ``` ```` at the
/// end. Fences anywhere else are content and stay.
pub fn strip_code_fences(text: &str) -> Cow<'_, str> {
    match LEADING_HTML_FENCE.replace(text, "") {
        Cow::Borrowed(rest) => TRAILING_FENCE.replace(rest, ""),
        Cow::Owned(rest) => Cow::Owned(TRAILING_FENCE.replace(&rest, "").into_owned()),
    }
}
