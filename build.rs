fn main() {
    // Host builds (tests, docs) have no ESP-IDF environment to forward. `embuild::espidf`
    // only exists once esp-idf-sys turns on embuild's `espidf` feature, which the `esp32`
    // feature pulls in.
    #[cfg(feature = "esp32")]
    embuild::espidf::sysenv::output();

    println!("cargo:rerun-if-changed=build.rs");
}
