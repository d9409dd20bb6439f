//! Info command implementation

use anyhow::Result;
use nsjoin::NamespaceKind;

pub fn execute(pid: Option<u32>) -> Result<()> {
    let target_pid = pid.unwrap_or_else(std::process::id);

    println!("\n🔒 Namespace membership for PID {target_pid}");
    println!("{:-<60}", "");

    for kind in NamespaceKind::ALL {
        let path = format!("/proc/{target_pid}/ns/{}", kind.as_str());
        match std::fs::read_link(&path) {
            Ok(link) => println!("  {:<5} {}", kind.as_str(), link.to_string_lossy()),
            Err(e) => println!("  {:<5} unavailable ({e})", kind.as_str()),
        }
    }

    Ok(())
}
