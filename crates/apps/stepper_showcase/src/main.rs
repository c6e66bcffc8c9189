//! Binary entrypoint for the browser-hosted stepper sandbox.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    stepper_showcase::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `stepper_showcase_app` for wasm32 with the `csr` feature."
    );
}
