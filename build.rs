/// d2dwrite build script.
///
/// Every struct and vtable in this crate has a native layout defined for
/// 32-bit and 64-bit Windows only.  Any other pointer width has no ABI to
/// match, so refuse to build rather than emit silently wrong layouts.
fn main() {
    let width = std::env::var("CARGO_CFG_TARGET_POINTER_WIDTH").unwrap_or_default();
    if width != "32" && width != "64" {
        panic!(
            "d2dwrite only defines layouts for 32- and 64-bit targets \
             (CARGO_CFG_TARGET_POINTER_WIDTH = {width:?})"
        );
    }

    // The layout fixtures are read by the test suite through include_str!,
    // so a fixture edit must trigger a rebuild.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=abi/layout-64.json");
    println!("cargo:rerun-if-changed=abi/layout-32.json");
}
