use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};

/// Named values attached to an [`Entry`](crate::Entry).
pub type Fields = BTreeMap<String, Value>;

/// Renders fields as space separated `name=value` pairs.
///
/// Strings are written JSON-quoted so values containing spaces stay
/// unambiguous; everything else uses its compact JSON form. Names that
/// aren't made only of alphanumerics, `_`, `-` and `.` are JSON-quoted too,
/// so a name can never pass for a separator or another pair.
pub struct Rendered<'a>(pub &'a Fields);

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut first = true;
        for (name, value) in self.0 {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if is_plain(name) {
                f.write_str(name)?;
            } else {
                write!(f, "{}", Value::from(name.as_str()))?;
            }
            write!(f, "={}", value)?;
        }
        Ok(())
    }
}

fn is_plain(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
