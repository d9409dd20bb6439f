use std::fs::File;
use std::os::fd::AsRawFd;

use serde_json::json;

use nsjoin::{join, Error, JoinRequest, NamespaceKind};

/// Check if running as root
fn is_root() -> bool {
    unsafe { libc::getuid() == 0 }
}

/// Namespace membership of the calling thread, as an OS-observable link
fn ns_link(kind: NamespaceKind) -> String {
    std::fs::read_link(format!("/proc/thread-self/ns/{}", kind.as_str()))
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[test]
fn test_wrong_argument_count() {
    let err = join(&[json!(5)]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgumentCount { got: 1 }));

    let err = join(&[]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgumentCount { got: 0 }));

    let err = join(&[json!(5), json!("net"), json!(0)]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgumentCount { got: 3 }));
}

#[test]
fn test_wrong_argument_types() {
    let err = join(&[json!("5"), json!("net")]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgumentType { .. }));

    let err = join(&[json!(5), json!(7)]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgumentType { .. }));
}

#[test]
fn test_unknown_kind_selector() {
    let err = join(&[json!(5), json!("docker")]).unwrap_err();

    assert!(matches!(err, Error::UnknownNamespaceKind { ref kind } if kind == "docker"));
    assert!(err.to_string().contains("\"docker\""));
}

#[test]
fn test_non_namespace_descriptor() {
    let before = ns_link(NamespaceKind::Net);

    let file = File::open("/dev/null").unwrap();
    let err = join(&[json!(file.as_raw_fd()), json!("net")]).unwrap_err();

    match err {
        Error::SyscallFailed { errno, .. } => assert_eq!(errno, libc::EINVAL),
        other => panic!("expected SyscallFailed, got {other:?}"),
    }

    // Membership is unchanged after a rejected call.
    assert_eq!(ns_link(NamespaceKind::Net), before);
}

#[test]
fn test_closed_descriptor() {
    let err = join(&[json!(-1), json!("net")]).unwrap_err();

    match err {
        Error::SyscallFailed { errno, description } => {
            assert_eq!(errno, libc::EBADF);
            assert!(!description.is_empty());
        }
        other => panic!("expected SyscallFailed, got {other:?}"),
    }
}

#[test]
fn test_join_without_capability() {
    // Root would be permitted; this test exercises the denied path.
    if is_root() {
        return;
    }

    let before = ns_link(NamespaceKind::Uts);

    let file = File::open("/proc/thread-self/ns/uts").unwrap();
    let request = JoinRequest::new(file.as_raw_fd(), NamespaceKind::Uts);
    let err = request.join().unwrap_err();

    match err {
        Error::SyscallFailed { errno, .. } => assert_eq!(errno, libc::EPERM),
        other => panic!("expected SyscallFailed, got {other:?}"),
    }

    assert_eq!(ns_link(NamespaceKind::Uts), before);
}

#[test]
#[ignore] // Requires root
fn test_rejoin_own_network_namespace() {
    if !is_root() {
        return;
    }

    let before = ns_link(NamespaceKind::Net);

    let file = File::open("/proc/thread-self/ns/net").unwrap();
    let request = JoinRequest::new(file.as_raw_fd(), NamespaceKind::Net);

    assert_eq!(request.join().unwrap(), 0);
    assert_eq!(ns_link(NamespaceKind::Net), before);
}

#[test]
#[ignore] // Requires root
fn test_join_pid_namespace_via_boundary() {
    if !is_root() {
        return;
    }

    let file = File::open("/proc/thread-self/ns/pid").unwrap();
    let result = join(&[json!(file.as_raw_fd()), json!("pid")]).unwrap();

    assert_eq!(result, 0);
}

#[test]
#[ignore] // Requires root
fn test_descriptor_stays_open_after_join() {
    if !is_root() {
        return;
    }

    let file = File::open("/proc/thread-self/ns/net").unwrap();
    let request = JoinRequest::new(file.as_raw_fd(), NamespaceKind::Net);

    // Platform semantics permit re-joining a network namespace; each call
    // issues its own syscall and the descriptor remains usable throughout.
    assert_eq!(request.join().unwrap(), 0);
    assert_eq!(request.join().unwrap(), 0);
}
