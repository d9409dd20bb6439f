//! Namespace join demonstration
//!
//! Run with: cargo run --example join_demo
//! Joining usually needs privileges: sudo cargo run --example join_demo

use std::fs::File;
use std::os::fd::AsRawFd;

use serde_json::json;

use nsjoin::{join, JoinRequest, NamespaceKind};

/// Check if running as root
fn is_root() -> bool {
    unsafe { libc::getuid() == 0 }
}

fn main() {
    println!("🔒 Namespace Join Demo\n");

    // Initialize tracing
    tracing_subscriber::fmt::init();

    demo_kind_selectors();
    demo_rejected_arguments();

    if is_root() {
        println!("\n🔐 Running with root privileges - demonstrating a real join\n");
        demo_rejoin_own_namespace();
    } else {
        println!("\n⚠️  Run with sudo to see a real setns(2) call succeed");
    }
}

fn demo_kind_selectors() {
    println!("📊 Recognized Kind Selectors:");
    println!("{:-<60}", "");

    for kind in NamespaceKind::ALL {
        println!(
            "  {:<5} -> {:?}",
            kind.as_str(),
            kind.to_clone_flags()
        );
    }
    println!();
}

fn demo_rejected_arguments() {
    println!("🚫 Rejected Argument Shapes:");
    println!("{:-<60}", "");

    let cases = vec![
        ("one argument", vec![json!(5)]),
        ("string descriptor", vec![json!("5"), json!("net")]),
        ("unknown selector", vec![json!(5), json!("docker")]),
    ];

    for (name, args) in cases {
        match join(&args) {
            Ok(code) => println!("  {name}: unexpectedly succeeded ({code})"),
            Err(e) => println!("  {name}: {e}"),
        }
    }
    println!();
}

fn demo_rejoin_own_namespace() {
    println!("🚀 Re-joining Our Own Network Namespace:");
    println!("{:-<60}", "");

    let file = match File::open("/proc/self/ns/net") {
        Ok(f) => f,
        Err(e) => {
            println!("❌ Failed to open namespace file: {e}");
            return;
        }
    };

    let request = JoinRequest::new(file.as_raw_fd(), NamespaceKind::Net);
    match request.join() {
        Ok(code) => println!("✅ setns returned {code}"),
        Err(e) => println!("❌ Join failed: {e}"),
    }
    println!();
}
