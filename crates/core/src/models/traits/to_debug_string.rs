/// Shorthand for `format!("{:?}", value)`, used to keep foreign error values
/// as the `underlying` string of our own errors.
pub trait ToDebugString {
    fn to_debug_string(&self) -> String;
}

impl<T: core::fmt::Debug> ToDebugString for T {
    fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }
}
