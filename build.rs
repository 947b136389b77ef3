fn main() {
    println!("cargo:rerun-if-env-changed=CTLSURFACE_CONFIG");

    // Host builds (tests, fuzzing) have no ESP-IDF toolchain to wire up.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
