use std::fmt::{Debug, Display};

/// Which step of the run failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Usage,
    Decode,
    Resize,
    Encode,
}

pub struct ThumbnailError {
    pub kind: ErrorKind,
    pub message: String,
}

impl Display for ThumbnailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for ThumbnailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind: &'static str = self.kind.into();
        f.debug_struct("ThumbnailError")
            .field("kind", &kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for ThumbnailError {}

#[macro_export]
macro_rules! tn_err {
    ($kind:expr, $($msg:tt)+) => {
        $crate::error::ThumbnailError {
            kind: $kind,
            message: format!(
                "thumbnail: {} @ {}:{}:{}",
                format_args!($($msg)+),
                file!(),
                line!(),
                column!()
            ),
        }
    };
}

#[macro_export]
macro_rules! tn_try {
    ($kind:expr, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::tn_err!($kind, "{}", err));
            }
        }
    };
}
