use std::io;
use std::path::Path;

use move_to_folder::fs_ops::io_error_with_help_io;

#[test]
fn permission_hint_keeps_kind_and_path() {
    let p = Path::new("/srv/share/report.txt");
    let e = io_error_with_help_io("move file", p)(io::Error::from(io::ErrorKind::PermissionDenied));
    assert_eq!(e.kind(), io::ErrorKind::PermissionDenied);
    let msg = e.to_string();
    assert!(msg.contains("move file"));
    assert!(msg.contains("/srv/share/report.txt"));
    assert!(msg.contains("permission denied"));
}

#[cfg(unix)]
#[test]
fn rename_conflict_hints() {
    let p = Path::new("/tmp/x");
    let notdir =
        io_error_with_help_io("move folder", p)(io::Error::from_raw_os_error(libc::ENOTDIR));
    assert!(notdir.to_string().contains("a file is in the way"), "{notdir}");
    let notempty =
        io_error_with_help_io("move folder", p)(io::Error::from_raw_os_error(libc::ENOTEMPTY));
    assert!(notempty.to_string().contains("cannot be replaced"), "{notempty}");
}

#[cfg(unix)]
#[test]
fn os_code_is_appended() {
    let p = Path::new("/tmp/x");
    let e = io_error_with_help_io("create folder", p)(io::Error::from_raw_os_error(
        libc::ENAMETOOLONG,
    ));
    let msg = e.to_string();
    assert!(msg.contains("too long"), "{msg}");
    assert!(msg.contains("[os code: "), "{msg}");
}
