// libusb20 ships in the FreeBSD (and DragonFly) base system as libusb.so.
// Elsewhere the crate falls back to `unsupported.rs` and links nothing.
fn main() {
    let os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if os == "freebsd" || os == "dragonfly" {
        println!("cargo:rustc-link-lib=dylib=usb");
    }
}
