//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.


#[cfg(any(target_os = "macos", target_os = "ios"))]
extern {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::timezone) -> libc::c_int;
}

#[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios"), not(target_os = "redox")))]
use libc::clock_gettime;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    use std::ptr::null_mut;

    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };
    let _ = gettimeofday(&mut tv, null_mut());
    (tv.tv_sec as i64, (tv.tv_usec / 1000) as i16)
}

#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(windows)]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    use std::mem;
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;
    let mut ft = mem::zeroed();

    GetSystemTimeAsFileTime(&mut ft);
    (file_time_to_unix_seconds(&ft), (file_time_to_nsec(&ft) / 1_000_000) as i16)
}

#[cfg(windows)]
fn file_time_to_nsec(ft: &FILETIME) -> i32 {
    let t = file_time_as_u64(ft) as i64;
    ((t % HECTONANOSECS_IN_SEC) * 100) as i32
}

#[cfg(windows)]
fn file_time_to_unix_seconds(ft: &FILETIME) -> i64 {
    let t = file_time_as_u64(ft) as i64;
    (t - HECTONANOSEC_TO_UNIX_EPOCH) / HECTONANOSECS_IN_SEC
}

#[cfg(windows)]
fn file_time_as_u64(ft: &FILETIME) -> u64 {
    ((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)
}


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(not(any(target_os = "macos", target_os = "ios", target_os = "redox", windows)))]
pub(crate) unsafe fn sys_time() -> (i64, i16) {
    let mut tv = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = clock_gettime(libc::CLOCK_REALTIME, &mut tv);
    (tv.tv_sec as i64, (tv.tv_nsec / 1_000_000) as i16)
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
#[cfg(target_os = "redox")]
pub(crate) fn sys_time() -> (i64, i16) {
    let mut ts = syscall::TimeSpec::default();
    let realtime_clock = syscall::CLOCK_REALTIME;
    let _ = syscall::clock_gettime(realtime_clock, &mut ts);
    (ts.tv_sec, (ts.tv_nsec / 1_000_000) as i16)
}
