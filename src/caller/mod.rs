//! Call-site introspection for the optional `function:` prefix and `(file:line)` suffix.
//!
//! Entry points are `#[track_caller]`, so the location they capture is the user's
//! logging call, never a frame inside this crate. The logging macros additionally
//! record the enclosing function's path at compile time. Turning that raw site into
//! printable text goes through a [`CallerResolver`], which the composer skips
//! entirely when neither annotation is wanted.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::panic::Location;
use std::sync::LazyLock;

/// Shown when the function or file can't be determined.
pub const UNKNOWN_FUNCTION: &str = "<unknown>";
pub const UNKNOWN_FILE: &str = "???";

/// Where a log call was made, as captured by the entry point.
#[derive(Debug, Clone, Copy)]
pub struct CallSite {
    function: Option<&'static str>,
    location: &'static Location<'static>,
}

impl CallSite {
    /// Site of the nearest caller not marked `#[track_caller]`; no function name.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Self {
            function: None,
            location: Location::caller(),
        }
    }

    #[must_use]
    pub const fn new(function: &'static str, location: &'static Location<'static>) -> Self {
        Self {
            function: Some(function),
            location,
        }
    }

    #[must_use]
    pub const fn function(&self) -> Option<&'static str> {
        self.function
    }

    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

/// Printable call-site data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub function: String,
    pub file: String,
    /// -1 when unknown.
    pub line: i64,
}

impl Caller {
    /// Placeholder used when resolution fails; the log call goes ahead with it.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            function: UNKNOWN_FUNCTION.to_string(),
            file: UNKNOWN_FILE.to_string(),
            line: -1,
        }
    }
}

/// Turns a captured site into printable data. `None` means resolution failed.
pub trait CallerResolver: Send + Sync {
    fn resolve(&self, site: &CallSite) -> Option<Caller>;
}

/// Default resolver. The location comes straight from the site. The function comes
/// from the macros when they recorded one, and otherwise from symbolizing the stack
/// frame that contains the site.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteResolver;

impl CallerResolver for SiteResolver {
    fn resolve(&self, site: &CallSite) -> Option<Caller> {
        let location = site.location();
        let function = match site.function() {
            Some(path) => shorten_function(path),
            None => symbolize(location).unwrap_or_else(|| UNKNOWN_FUNCTION.to_string()),
        };
        Some(Caller {
            function,
            file: location.file().to_string(),
            line: i64::from(location.line()),
        })
    }
}

/// Shortened names of already-symbolized sites. Locations are `'static` and unique per
/// call site, so the stack is only walked once for each.
static SYMBOLIZED: LazyLock<Mutex<HashMap<SiteKey, Option<String>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

type SiteKey = (&'static str, u32, u32);

/// Function whose debug info places a frame at `location`. `None` without debug info.
fn symbolize(location: &'static Location<'static>) -> Option<String> {
    let key = (location.file(), location.line(), location.column());
    if let Some(cached) = SYMBOLIZED.lock().get(&key) {
        return cached.clone();
    }

    let mut found = None;
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() {
                return;
            }
            let at_site = symbol.lineno() == Some(location.line())
                && symbol
                    .filename()
                    .is_some_and(|file| file.ends_with(location.file()));
            if at_site && let Some(name) = symbol.name() {
                // `{:#}` drops the trailing hash
                found = Some(shorten_function(&format!("{name:#}")));
            }
        });
        found.is_none()
    });

    SYMBOLIZED.lock().insert(key, found.clone());
    found
}

/// `my_crate::net::client::connect::{{closure}}` becomes `client::connect`:
/// closure frames are dropped and only the owning module and the function remain.
#[must_use]
pub fn shorten_function(path: &str) -> String {
    let mut path = path;
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    let segments: Vec<&str> = path.split("::").collect();
    let keep = segments.len().saturating_sub(2);
    segments[keep..].join("::")
}

/// File name without its directories; handles both separator styles.
#[must_use]
pub fn short_file(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

/// Removes the marker function the logging macros use to learn their enclosing path.
#[doc(hidden)]
#[must_use]
pub fn strip_marker(type_name: &'static str) -> &'static str {
    type_name.strip_suffix("::__linelog_marker").unwrap_or(type_name)
}

/// Path of the function this macro is expanded in.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __linelog_marker() {}
        $crate::caller::strip_marker(::std::any::type_name_of_val(&__linelog_marker))
    }};
}
