//! Book identifiers
//!
//! The canonical ordering of three-letter book codes. Book numbers are 1-based positions in
//! [ALL_BOOK_IDS]; 0 stands for "not a known book".

#[rustfmt::skip]
pub const ALL_BOOK_IDS: [&str; 123] = [
    "GEN", "EXO", "LEV", "NUM", "DEU", "JOS", "JDG", "RUT", "1SA", "2SA",
    "1KI", "2KI", "1CH", "2CH", "EZR", "NEH", "EST", "JOB", "PSA", "PRO",
    "ECC", "SNG", "ISA", "JER", "LAM", "EZK", "DAN", "HOS", "JOL", "AMO",
    "OBA", "JON", "MIC", "NAM", "HAB", "ZEP", "HAG", "ZEC", "MAL", "MAT",
    "MRK", "LUK", "JHN", "ACT", "ROM", "1CO", "2CO", "GAL", "EPH", "PHP",
    "COL", "1TH", "2TH", "1TI", "2TI", "TIT", "PHM", "HEB", "JAS", "1PE",
    "2PE", "1JN", "2JN", "3JN", "JUD", "REV", "TOB", "JDT", "ESG", "WIS",
    "SIR", "BAR", "LJE", "S3Y", "SUS", "BEL", "1MA", "2MA", "3MA", "4MA",
    "1ES", "2ES", "MAN", "PS2", "ODA", "PSS", "JSA", "JDB", "TBS", "SST",
    "DNT", "BLT", "XXA", "XXB", "XXC", "XXD", "XXE", "XXF", "XXG", "FRT",
    "BAK", "OTH", "3ES", "EZA", "5EZ", "6EZ", "INT", "CNC", "GLO", "TDX",
    "NDX", "DAG", "PS3", "2BA", "LBA", "JUB", "ENO", "1MQ", "2MQ", "3MQ",
    "REP", "4BA", "LAO",
];

/// Books that carry front/back matter or extra material rather than scripture text
#[rustfmt::skip]
pub const NON_CANONICAL_IDS: [&str; 15] = [
    "XXA", "XXB", "XXC", "XXD", "XXE", "XXF", "XXG", "FRT", "BAK", "OTH",
    "INT", "CNC", "GLO", "TDX", "NDX",
];

pub const FIRST_BOOK: usize = 1;
pub const LAST_BOOK: usize = ALL_BOOK_IDS.len();

/// Book number for an id, case-insensitive. Returns 0 for unknown ids.
pub fn book_id_to_number(id: &str) -> usize {
    ALL_BOOK_IDS
        .iter()
        .position(|known| known.eq_ignore_ascii_case(id))
        .map_or(0, |index| index + 1)
}

/// Book id for a 1-based book number
pub fn book_number_to_id(number: usize) -> Option<&'static str> {
    if (FIRST_BOOK..=LAST_BOOK).contains(&number) {
        Some(ALL_BOOK_IDS[number - 1])
    } else {
        None
    }
}

pub fn is_canonical(id: &str) -> bool {
    book_id_to_number(id) > 0
        && !NON_CANONICAL_IDS
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(id))
}
