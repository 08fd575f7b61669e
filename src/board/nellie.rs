//! The 74-day "Around the World with Nellie Bly" track.

/// `(name, offset, turns)` per day, starting at day 1.
pub(super) const NELLIE_BLY: [(&str, i32, i32); 74] = [
    ("Start", 0, 0),
    ("Clear", 3, 0),
    ("Rain", -1, 0),
    ("Storm", -2, 0),
    ("Icebergs", -4, 0),
    ("Clearing", 2, 0),
    ("Fair Sailing", 0, 0),
    ("Southampton", 1, 0),
    ("Amiens", 0, 1),
    ("Indian Mail Accident", -5, 0),
    ("Brindisi Brigands", -2, 0),
    ("Mediterranean", 0, 0),
    ("Suez Canal", 0, -1),
    ("Thanksgiving", 4, 0),
    ("Ismailia", 0, 0),
    ("Red Sea", 0, 0),
    ("Stormy", -5, 0),
    ("Strikes a Rock", -5, 0),
    ("Aden", 5, 0),
    ("Arabian Sea", 0, 1),
    ("Stuck on Sand Bar", 0, -2),
    ("Indian Ocean", -1, 0),
    ("Indian Ocean", 0, 0),
    ("Indian Ocean", 0, 0),
    ("Indian Ocean - Out of Coal", 0, -1),
    ("Colombo", 0, 0),
    ("Ceylon", 0, 0),
    ("Bay of Bengal", 6, 0),
    ("Bay of Bengal", 0, 0),
    ("Malacca Straits - Pirate Ship", -3, 0),
    ("Off Sumatra", 0, 0),
    ("Malacca Straits", 1, 0),
    ("Singapore", 0, 0),
    ("Siam", 2, 0),
    ("China Sea", 0, 0),
    ("Simoon", -10, 0),
    ("Borneo", 2, 0),
    ("China Sea", 0, 0),
    ("China Sea", -3, 0),
    ("Hong Kong", 0, 0),
    ("Christmas", 0, 1),
    ("Joss China", 0, 0),
    ("Canton", 0, -1),
    ("Hong Kong", 0, 0),
    ("China Sea", 3, 0),
    ("China Sea", 0, 0),
    ("Off Formosa", -5, 0),
    ("New Year's Day", 5, 0),
    ("Yokohama", 1, 0),
    ("Yokohama", 0, 0),
    ("Yeddo", 0, 1),
    ("Yokohama", 0, 0),
    ("Yokohama - Delay", -5, 0),
    ("Yokohama", 0, 0),
    ("On the Pacific", -2, 0),
    ("Stormy", -10, 0),
    ("Clear", 1, 0),
    ("Break in Machinery", -3, 0),
    ("Clear", 0, 0),
    ("Fair", 2, 0),
    ("Clear", 0, 0),
    ("Storm", 0, -3),
    ("Collision", -15, 0),
    ("On Raft", 0, -2),
    ("Rescued", 1, 0),
    ("Clear", 0, 0),
    ("Pacific Ocean", 0, -1),
    ("Golden Gate", 0, 0),
    ("Sierra Mountains - Snow Bound", 0, -5),
    ("Cheyenne Indians", -2, 0),
    ("Omaha", 3, 0),
    ("Leaving Chicago", 0, -1),
    ("First Part of Day 73", 0, 0),
    ("Center", 0, 0),
];
