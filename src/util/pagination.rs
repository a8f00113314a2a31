/// Longest page, in characters, shown by the channel listing menu.
pub const MAX_PAGE_LENGTH: usize = 4000;

/// Groups rendered entries into pages of at most `max_len` characters.
///
/// Entries are never split; an entry longer than `max_len` gets a page of its own.
pub fn chunk_entries(entries: &[String], max_len: usize) -> Vec<String> {
    let mut pages = Vec::new();
    let mut current = String::new();

    for entry in entries {
        if !current.is_empty()
            && current.chars().count() + entry.chars().count() > max_len
        {
            pages.push(std::mem::take(&mut current));
        }
        current.push_str(entry);
    }

    if !current.is_empty() {
        pages.push(current);
    }

    pages
}
