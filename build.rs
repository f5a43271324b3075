fn main() {
    // Only the ESP32 firmware image needs the ESP-IDF environment; host
    // builds (library + tests) skip it entirely.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
