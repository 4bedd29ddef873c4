use std::{env, sync::OnceLock};

use crate::DEBUG_ENV;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// `JGDEBUG` turns on the debug log category, mirrors log lines to stderr,
/// and opens devtools on the game window. Read once; flipping the variable
/// mid-run has no effect.
pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| flag_value_enables_debug(env::var(DEBUG_ENV).ok().as_deref()))
}

pub(crate) fn flag_value_enables_debug(value: Option<&str>) -> bool {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            !trimmed.is_empty() && trimmed != "0" && !trimmed.eq_ignore_ascii_case("false")
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::flag_value_enables_debug;

    #[test]
    fn unset_and_empty_values_leave_debug_off() {
        assert!(!flag_value_enables_debug(None));
        assert!(!flag_value_enables_debug(Some("")));
        assert!(!flag_value_enables_debug(Some("   ")));
    }

    #[test]
    fn zero_and_false_leave_debug_off() {
        assert!(!flag_value_enables_debug(Some("0")));
        assert!(!flag_value_enables_debug(Some("false")));
        assert!(!flag_value_enables_debug(Some("FALSE")));
    }

    #[test]
    fn any_other_value_turns_debug_on() {
        assert!(flag_value_enables_debug(Some("1")));
        assert!(flag_value_enables_debug(Some("true")));
        assert!(flag_value_enables_debug(Some("yes please")));
    }
}
