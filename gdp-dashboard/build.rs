// The API key is captured with `option_env!` at compile time, so a changed
// key has to trigger a rebuild.
fn main() {
    println!("cargo:rerun-if-env-changed=API_KEY");
    println!("cargo:rerun-if-changed=build.rs");
}
