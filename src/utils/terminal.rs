//! Terminal output sanitization
//!
//! Message text comes straight from user files. Before it is printed to a
//! terminal, escape sequences are removed so a crafted `.msg` file cannot move
//! the cursor, recolor the screen or ring the bell.

const ESC: char = '\x1b';

/// Removes ANSI escape sequences and control characters (tab is kept)
///
/// # Examples
///
/// ```
/// use msg_viewer::utils::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mhi\x1b[0m :)"), "hi :)");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                // CSI: ESC [ params final-byte
                Some('[') => {
                    chars.next();
                    for next in chars.by_ref() {
                        if ('@'..='~').contains(&next) {
                            break;
                        }
                    }
                }
                // OSC: ESC ] ... terminated by BEL or ESC \
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == '\x07' {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Two-byte escape such as ESC c
                Some(_) => {
                    chars.next();
                }
                None => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' {
            continue;
        }
        result.push(ch);
    }

    result
}
