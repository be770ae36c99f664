//! Cell values that may be missing
//!
//! Spreadsheet cells that fail to parse do not abort a load. They become
//! [`Value::Missing`], and every aggregation skips missing entries.

/// A coerced cell: either a usable value or missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value<T> {
    Present(T),
    Missing,
}

impl<T> Value<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Value::Present(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_ref(&self) -> Value<&T> {
        match self {
            Value::Present(v) => Value::Present(v),
            Value::Missing => Value::Missing,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Value<U> {
        match self {
            Value::Present(v) => Value::Present(f(v)),
            Value::Missing => Value::Missing,
        }
    }

    /// Keep `self` if present, otherwise evaluate the fallback.
    pub fn or_else<F: FnOnce() -> Value<T>>(self, f: F) -> Value<T> {
        match self {
            Value::Present(v) => Value::Present(v),
            Value::Missing => f(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Value::Present(v) => Some(v),
            Value::Missing => None,
        }
    }
}

impl Value<String> {
    pub fn as_deref(&self) -> Value<&str> {
        match self {
            Value::Present(v) => Value::Present(v.as_str()),
            Value::Missing => Value::Missing,
        }
    }
}

impl Value<f64> {
    /// Missing numbers contribute nothing to a sum.
    pub fn or_zero(self) -> f64 {
        match self {
            Value::Present(v) => v,
            Value::Missing => 0.0,
        }
    }
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::Missing
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Value::Present(v),
            None => Value::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_else_prefers_present() {
        let primary: Value<i32> = Value::Present(1);
        assert_eq!(primary.or_else(|| Value::Present(2)), Value::Present(1));

        let missing: Value<i32> = Value::Missing;
        assert_eq!(missing.or_else(|| Value::Present(2)), Value::Present(2));
    }

    #[test]
    fn test_or_zero() {
        assert_eq!(Value::Present(4.5).or_zero(), 4.5);
        assert_eq!(Value::<f64>::Missing.or_zero(), 0.0);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(Some("a")), Value::Present("a"));
        assert!(Value::<&str>::from(None).is_missing());
    }
}
