#[cfg(feature = "tracing")]
macro_rules! svtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scrollview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! svtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! svdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scrollview", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! svdebug {
    ($($tt:tt)*) => {};
}
