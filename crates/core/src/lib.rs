#![forbid(unsafe_code)]

pub mod model {
    /// One task record as stored and listed. `id` is assigned by storage and
    /// never reused for another row.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Todo {
        pub id: i64,
        pub text: String,
    }

    /// Task text validated at the dispatch boundary: storage only ever sees
    /// text that is non-empty after trimming.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct TodoText(String);

    impl TodoText {
        pub fn try_new(value: impl Into<String>) -> Result<Self, TodoTextError> {
            let value = value.into();
            if value.trim().is_empty() {
                return Err(TodoTextError::Empty);
            }
            Ok(Self(value))
        }

        pub fn as_str(&self) -> &str {
            &self.0
        }

        pub fn into_string(self) -> String {
            self.0
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum TodoTextError {
        Empty,
    }

    impl std::fmt::Display for TodoTextError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Empty => write!(f, "text must not be empty"),
            }
        }
    }

    impl std::error::Error for TodoTextError {}
}
