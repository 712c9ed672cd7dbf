use std::fs;

use system_io::{Console, Options, Properties, System, Value, SENTINEL};
use tempfile::TempDir;

fn add(left: i64, right: i64) -> i64 {
    left + right
}

#[test]
fn test_script_walkthrough() {
    let tmp_dir = TempDir::new().expect("Unable to create temporary directory");
    let path = tmp_dir.path().join("test.txt");
    let system = System::with_console(Console::new(Vec::new()), Options::default());

    let flags = ["FILE_WRITE_ONLY", "FILE_CREATE", "FILE_TRUNCATE"]
        .iter()
        .map(|name| system.constant(name).expect("Constant missing"))
        .fold(0, |mask, flag| mask | flag);

    system.println(&[Value::from("Hello World"), Value::from("Testing")]);
    system.println(&[Value::from(add(4, 10))]);
    system.print(&[Value::from("Hello")]);
    system.println(&[Value::from("World")]);
    for index in 0..3 {
        system.print(&[Value::from(index), Value::from(" ")]);
    }
    system.println(&[]);

    let file = system.open(&path, flags).expect("Open failed");
    system.println(&[Value::from("File:"), Value::from(file)]);
    let result = system.write(file, "Hello World");
    if result == SENTINEL {
        system.println(&[Value::from("Error while writing to file")]);
    }
    system.close(file).expect("Close failed");

    let mut object = Properties::new();
    object.set("test", "Hello World");
    system.println(&[object.get("test")]);

    let output = String::from_utf8(system.into_console()).expect("Invalid UTF8");
    assert_eq!(
        output,
        "Hello World Testing\n14\nHelloWorld\n0  1  2  \nFile: 3\nHello World\n"
    );
    assert_eq!(
        fs::read_to_string(&path).expect("Reading file failed"),
        "Hello World"
    );
}

#[test]
fn test_failed_write_is_reported() {
    let system = System::with_console(Console::new(Vec::new()), Options::default());
    let handle = 42.into();

    if system.write(handle, "Hello World") == SENTINEL {
        system.println(&[Value::from("Error while writing to file")]);
    }

    assert_eq!(
        String::from_utf8(system.into_console()).expect("Invalid UTF8"),
        "Error while writing to file\n"
    );
}
