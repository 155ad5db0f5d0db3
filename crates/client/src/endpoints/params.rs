//! Recognized query parameters and the declarative macro that serializes them.
//!
//! Every operation in the security API family understands the same small set
//! of query parameters, but not every operation sends them. An endpoint names
//! the subset it honors with a [`QueryParams`] flag set and
//! [`query_params!`](crate::query_params) does the rest.

use bitflags::bitflags;

/// Query string key for the deprecated cluster-manager timeout alias.
pub const MASTER_TIMEOUT: &str = "master_timeout";
/// Query string key for the cluster-manager timeout.
pub const CLUSTER_MANAGER_TIMEOUT: &str = "cluster_manager_timeout";
/// Query string key for the operation timeout.
pub const TIMEOUT: &str = "timeout";
/// Query string key for the active shard count to wait for.
pub const WAIT_FOR_ACTIVE_SHARDS: &str = "wait_for_active_shards";
/// Query string key for pretty-printed responses.
pub const PRETTY: &str = "pretty";
/// Query string key for human-readable statistics.
pub const HUMAN: &str = "human";
/// Query string key for error stack traces.
pub const ERROR_TRACE: &str = "error_trace";
/// Query string key for response filtering.
pub const FILTER_PATH: &str = "filter_path";

bitflags! {
    /// The set of recognized query parameters an endpoint serializes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QueryParams: u16 {
        const MASTER_TIMEOUT = 1 << 0;
        const CLUSTER_MANAGER_TIMEOUT = 1 << 1;
        const TIMEOUT = 1 << 2;
        const WAIT_FOR_ACTIVE_SHARDS = 1 << 3;
        const PRETTY = 1 << 4;
        const HUMAN = 1 << 5;
        const ERROR_TRACE = 1 << 6;
        const FILTER_PATH = 1 << 7;

        /// Response-shaping parameters shared by read operations.
        const FORMATTING = Self::PRETTY.bits()
            | Self::HUMAN.bits()
            | Self::ERROR_TRACE.bits()
            | Self::FILTER_PATH.bits();
    }
}

/// Collect query parameters into a map, honoring a [`QueryParams`] set.
///
/// # Syntax Patterns
///
/// - `FLAG, key => duration expr` - For `Option<Duration>`, includes if Some and non-zero
/// - `FLAG, key => ref expr` - For `Option<String>`, includes if Some and non-empty
/// - `FLAG, key => flag expr` - For `bool`, includes `"true"` if set
/// - `FLAG, key => join expr` - For `Vec<String>`, includes if not empty with comma-join
///
/// A parameter whose `FLAG` is missing from the honored set is skipped even
/// when a value is present.
///
/// ```ignore
/// let mut params = BTreeMap::new();
/// query_params! { params, honored =>
///     TIMEOUT, "timeout" => duration options.timeout,
///     PRETTY, "pretty" => flag options.pretty,
/// }
/// ```
#[macro_export]
macro_rules! query_params {
    // Base case: no more parameters
    ($map:ident, $honored:expr =>) => {};

    ($map:ident, $honored:expr => $flag:ident, $key:expr => duration $val:expr, $($rest:tt)*) => {
        if $honored.contains($crate::endpoints::QueryParams::$flag) {
            if let Some(d) = $val {
                if !d.is_zero() {
                    $map.insert($key, $crate::format::format_duration(d));
                }
            }
        }
        $crate::query_params!($map, $honored => $($rest)*);
    };

    ($map:ident, $honored:expr => $flag:ident, $key:expr => ref $val:expr, $($rest:tt)*) => {
        if $honored.contains($crate::endpoints::QueryParams::$flag) {
            if let Some(ref v) = $val {
                if !v.is_empty() {
                    $map.insert($key, v.clone());
                }
            }
        }
        $crate::query_params!($map, $honored => $($rest)*);
    };

    ($map:ident, $honored:expr => $flag:ident, $key:expr => flag $val:expr, $($rest:tt)*) => {
        if $honored.contains($crate::endpoints::QueryParams::$flag) && $val {
            $map.insert($key, "true".to_string());
        }
        $crate::query_params!($map, $honored => $($rest)*);
    };

    ($map:ident, $honored:expr => $flag:ident, $key:expr => join $val:expr, $($rest:tt)*) => {
        if $honored.contains($crate::endpoints::QueryParams::$flag) && !$val.is_empty() {
            $map.insert($key, $val.join(","));
        }
        $crate::query_params!($map, $honored => $($rest)*);
    };
}
