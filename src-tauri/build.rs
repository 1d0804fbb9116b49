fn main() {
    // Build scripts run on the host, so check the target explicitly.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        cc::Build::new()
            .file("src/login_item_helper.m")
            .flag("-fobjc-arc")
            .compile("login_item_helper");
        println!("cargo:rerun-if-changed=src/login_item_helper.m");
        println!("cargo:rustc-link-lib=framework=Foundation");
        println!("cargo:rustc-link-lib=framework=ServiceManagement");
    }

    tauri_build::build();
}
