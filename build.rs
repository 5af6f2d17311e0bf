use protobuf_codegen_pure::Codegen;

/// Generate the prometheus remote storage messages into `src/proto`.
///
/// The generated files carry inner attributes, so they are written next to
/// `src/proto/mod.rs` instead of being `include!`d from `OUT_DIR`.
fn main() {
    println!("cargo:rerun-if-changed=proto/types.proto");
    println!("cargo:rerun-if-changed=proto/remote.proto");

    Codegen::new()
        .out_dir("src/proto")
        .inputs(&["proto/types.proto", "proto/remote.proto"])
        .include("proto")
        .run()
        .expect("protobuf codegen failed");
}
