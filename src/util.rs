/// Log an error and terminate the process. For failures during daemon
/// setup where no caller can recover.
#[macro_export]
macro_rules! error_exit {
    ($($arg:tt)*) => {{
        ::log::error!($($arg)*);
        ::std::process::exit(1)
    }};
}

pub trait StrExt: AsRef<str> {
    fn nonblank_to_some(&self) -> Option<String> {
        Some(self.as_ref().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }
}

impl<T: AsRef<str>> StrExt for T {}
