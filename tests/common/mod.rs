use time_utils::time::Duration;

/// The five fields as a tuple, which makes failed assertions easy to read.
#[must_use]
pub fn fields(duration: &Duration) -> (u32, u8, u8, u8, u16) {
    (
        duration.days(),
        duration.hours(),
        duration.minutes(),
        duration.seconds(),
        duration.milliseconds(),
    )
}

#[must_use]
pub fn make_duration(days: u32, hours: u8, minutes: u8, seconds: u8, milliseconds: u16) -> Duration {
    Duration::new_checked(days, hours, minutes, seconds, milliseconds)
        .expect("test duration should be valid")
}

/// Millisecond counts spread over the whole `u32` range, including the
/// points where the fields roll over.
#[allow(dead_code)]
pub fn interesting_milliseconds() -> impl Iterator<Item = u32> {
    let edges = [
        0,
        1,
        999,
        1_000,
        59_999,
        60_000,
        3_599_999,
        3_600_000,
        86_399_999,
        86_400_000,
        90_061_500,
        u32::MAX - 1,
        u32::MAX,
    ];

    edges
        .into_iter()
        .chain((0..u32::MAX).step_by(7_919_993))
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");
}
