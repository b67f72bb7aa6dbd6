fn main() {
    // Host builds (tests, simulation) skip the ESP-IDF environment probe.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
