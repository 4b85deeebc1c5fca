//! Static help text.

const COMMANDS: &str = "\
Available commands:
- list: Lists all disks
- nd <name> [format] [sectors]: Creates a new disk with a custom number of sectors
- dd <name>: Deletes a disk
- fd [name] [format] [sectors]: Formats a disk with a custom number of sectors
- sd <name>: Selects a disk
- vd: Visualizes the selected disk
- dm: Displays memory stats of the selected disk
- mv <line>x<sector>: Moves the cursor
- inc [amount]: Increments the sector value by the specified amount, defaults to 1
- dec [amount]: Decrements the sector value by the specified amount, defaults to 1
- ri [value]: Increases every sector value, defaults to 1
- ira: Increases every sector value in a 1/9 cycle until interrupted (Ctrl+C)
- sum: Sums all sector values
- nv <value>: Overwrites the sector under the cursor
- df: Defragments the selected disk (sorts each line)
- wc: Writes changes to disk (Deprecated)
- cs: Clears the screen
- cp <source> <destination>: Copies a disk to a new disk
- rn <old_name> <new_name>: Renames a disk
- fn <value>: Finds the first occurrence of a value in sectors and moves the cursor to it
- rp <old_value> <new_value>: Replaces all occurrences of a value in sectors with a new value
- help cmd: Shows this command list
- help err: Shows error codes and their meanings
- exit / quit: Leaves the emulator
- Inline commands can be chained using '>>'
- loop(N): a >> b repeats a chain N times";

const ERRORS: &str = "\
Error codes:
- ERR001: Disk not found
- ERR002: No disk selected
- ERR003: Cursor position out of bounds
- ERR004: Modification out of bounds
- ERR005: Unknown command
- ERR006: Empty command
- ERR007: Internal fault
- ERR008: Copy failed
- ERR009: Rename failed
- ERR010: Value not found
- ERR011: Replace failed";

const UNKNOWN_TOPIC: &str =
    "Invalid help topic. Use 'help cmd' for command help or 'help err' for error help.";

/// Help text for a topic (`cmd` or `err`).
pub fn help_text(topic: Option<&str>) -> &'static str {
    match topic {
        Some("cmd") => COMMANDS,
        Some("err") => ERRORS,
        _ => UNKNOWN_TOPIC,
    }
}
