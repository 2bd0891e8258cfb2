// lightcity/src/log.rs
// Logger mínimo redirigible. Por defecto imprime a consola.
// Llamar set_logger(fn(&str)) antes de arrancar los semáforos.

use core::sync::atomic::{AtomicPtr, Ordering};

type LogFn = fn(&str);

fn console_log(s: &str) {
    println!("{}", s);
}

// Puntero a función, sin Mutex. Se asume que set_logger() corre antes
// del uso concurrente.
static LOGGER_PTR: AtomicPtr<()> = AtomicPtr::new(console_log as *mut ());

#[inline]
pub fn set_logger(f: LogFn) {
    LOGGER_PTR.store(f as *mut (), Ordering::Relaxed);
}

#[inline]
pub fn log_str(s: &str) {
    let p = LOGGER_PTR.load(Ordering::Relaxed);
    let f: LogFn = unsafe { core::mem::transmute(p) };
    f(s);
}

#[macro_export]
macro_rules! lc_log {
    ($($arg:tt)*) => {{
        $crate::log::log_str(&format!($($arg)*));
    }};
}
