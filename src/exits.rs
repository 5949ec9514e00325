//! Exit handling: restore the terminal on signals and normal exit.

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit; runs on every exit path including process::exit.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    // Only print escape codes if stdout is a TTY (not when piping)
    unsafe {
        if libc::isatty(1) == 1 {
            let seq = b"\x1b[0m\x1b[?25h";
            libc::write(1, seq.as_ptr() as *const libc::c_void, seq.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit so atexit cleanup runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}
