//! Scale types grouped by size. The church modes open the heptatonic
//! group, starting from `major`.

/// Built-in scale types: `(name, intervals)`.
pub const SCALES: &[(&str, &str)] = &[
    // 5 notes
    ("major pentatonic", "1P 2M 3M 5P 6M"),
    ("ionian pentatonic", "1P 3M 4P 5P 7M"),
    ("mixolydian pentatonic", "1P 3M 4P 5P 7m"),
    ("ritusen", "1P 2M 4P 5P 6M"),
    ("egyptian", "1P 2M 4P 5P 7m"),
    ("neopolitan major pentatonic", "1P 3M 4P 5d 7m"),
    ("vietnamese 1", "1P 3m 4P 5P 6m"),
    ("pelog", "1P 2m 3m 5P 6m"),
    ("kumoijoshi", "1P 2m 4P 5P 6m"),
    ("hirajoshi", "1P 2M 3m 5P 6m"),
    ("iwato", "1P 2m 4P 5d 7m"),
    ("in-sen", "1P 2m 4P 5P 7m"),
    ("lydian pentatonic", "1P 3M 4A 5P 7M"),
    ("malkos raga", "1P 3m 4P 6m 7m"),
    ("locrian pentatonic", "1P 3m 4P 5d 7m"),
    ("minor pentatonic", "1P 3m 4P 5P 7m"),
    ("minor six pentatonic", "1P 3m 4P 5P 6M"),
    ("flat three pentatonic", "1P 2M 3m 5P 6M"),
    ("flat six pentatonic", "1P 2M 3M 5P 6m"),
    ("scriabin", "1P 2m 3M 5P 6M"),
    ("whole tone pentatonic", "1P 3M 5d 6m 7m"),
    ("lydian #5P pentatonic", "1P 3M 4A 5A 7M"),
    ("lydian dominant pentatonic", "1P 3M 4A 5P 7m"),
    ("minor #7M pentatonic", "1P 3m 4P 5P 7M"),
    ("super locrian pentatonic", "1P 3m 4d 5d 7m"),
    // 6 notes
    ("minor hexatonic", "1P 2M 3m 4P 5P 7M"),
    ("augmented", "1P 2A 3M 5P 5A 7M"),
    ("major blues", "1P 2M 3m 3M 5P 6M"),
    ("piongio", "1P 2M 4P 5P 6M 7m"),
    ("prometheus neopolitan", "1P 2m 3M 4A 6M 7m"),
    ("prometheus", "1P 2M 3M 4A 6M 7m"),
    ("mystery #1", "1P 2m 3M 5d 6m 7m"),
    ("six tone symmetric", "1P 2m 3M 4P 5A 6M"),
    ("whole tone", "1P 2M 3M 4A 5A 7m"),
    ("messiaen's mode #5", "1P 2m 4P 4A 5P 7M"),
    ("minor blues", "1P 3m 4P 5d 5P 7m"),
    // 7 notes
    ("major", "1P 2M 3M 4P 5P 6M 7M"),
    ("dorian", "1P 2M 3m 4P 5P 6M 7m"),
    ("phrygian", "1P 2m 3m 4P 5P 6m 7m"),
    ("lydian", "1P 2M 3M 4A 5P 6M 7M"),
    ("mixolydian", "1P 2M 3M 4P 5P 6M 7m"),
    ("aeolian", "1P 2M 3m 4P 5P 6m 7m"),
    ("locrian", "1P 2m 3m 4P 5d 6m 7m"),
    ("locrian major", "1P 2M 3M 4P 5d 6m 7m"),
    ("double harmonic lydian", "1P 2m 3M 4A 5P 6m 7M"),
    ("harmonic minor", "1P 2M 3m 4P 5P 6m 7M"),
    ("altered", "1P 2m 2A 3M 4A 6m 7m"),
    ("locrian #2", "1P 2M 3m 4P 5d 6m 7m"),
    ("mixolydian b6", "1P 2M 3M 4P 5P 6m 7m"),
    ("lydian dominant", "1P 2M 3M 4A 5P 6M 7m"),
    ("lydian augmented", "1P 2M 3M 4A 5A 6M 7M"),
    ("dorian b2", "1P 2m 3m 4P 5P 6M 7m"),
    ("melodic minor", "1P 2M 3m 4P 5P 6M 7M"),
    ("ultralocrian", "1P 2m 3m 4d 5d 6m 7d"),
    ("locrian 6", "1P 2m 3m 4P 5d 6M 7m"),
    ("augmented heptatonic", "1P 2A 3M 4P 5P 5A 7M"),
    ("dorian #4", "1P 2M 3m 4A 5P 6M 7m"),
    ("lydian diminished", "1P 2M 3m 4A 5P 6M 7M"),
    ("leading whole tone", "1P 2M 3M 4A 5A 6A 7M"),
    ("lydian minor", "1P 2M 3M 4A 5P 6m 7m"),
    ("phrygian dominant", "1P 2m 3M 4P 5P 6m 7m"),
    ("balinese", "1P 2m 3m 4P 5P 6m 7M"),
    ("neopolitan major", "1P 2m 3m 4P 5P 6M 7M"),
    ("double harmonic major", "1P 2m 3M 4P 5P 6m 7M"),
    ("hungarian minor", "1P 2M 3m 4A 5P 6m 7M"),
    ("hungarian major", "1P 2A 3M 4A 5P 6M 7m"),
    ("oriental", "1P 2m 3M 4P 5d 6M 7m"),
    ("flamenco", "1P 2m 3m 3M 4A 5P 7m"),
    ("todi raga", "1P 2m 3m 4A 5P 6m 7M"),
    ("persian", "1P 2m 3M 4P 5d 6m 7M"),
    ("enigmatic", "1P 2m 3M 4A 5A 6A 7M"),
    ("major augmented", "1P 2M 3M 4P 5A 6M 7M"),
    ("lydian #9", "1P 2A 3M 4A 5P 6M 7M"),
    // 8 notes
    ("messiaen's mode #4", "1P 2m 2M 4P 4A 5P 6m 7M"),
    ("purvi raga", "1P 2m 3M 4P 4A 5P 6m 7M"),
    ("spanish heptatonic", "1P 2m 3m 3M 4P 5P 6m 7m"),
    ("bebop", "1P 2M 3M 4P 5P 6M 7m 7M"),
    ("bebop minor", "1P 2M 3m 3M 4P 5P 6M 7m"),
    ("bebop major", "1P 2M 3M 4P 5P 5A 6M 7M"),
    ("bebop locrian", "1P 2m 3m 4P 5d 5P 6m 7m"),
    ("minor bebop", "1P 2M 3m 4P 5P 6m 7m 7M"),
    ("diminished", "1P 2M 3m 4P 5d 6m 6M 7M"),
    ("ichikosucho", "1P 2M 3M 4P 5d 5P 6M 7M"),
    ("minor six diminished", "1P 2M 3m 4P 5P 6m 6M 7M"),
    ("half-whole diminished", "1P 2m 3m 3M 4A 5P 6M 7m"),
    ("kafi raga", "1P 3m 3M 4P 5P 6M 7m 7M"),
    ("messiaen's mode #6", "1P 2M 3M 4P 4A 5A 6A 7M"),
    // 9 notes
    ("composite blues", "1P 2M 3m 3M 4P 5d 5P 6M 7m"),
    ("messiaen's mode #3", "1P 2M 3m 3M 4A 5P 6m 7m 7M"),
    // 10 notes
    ("messiaen's mode #7", "1P 2m 2M 3m 4P 4A 5P 6m 6M 7M"),
    // 12 notes
    ("chromatic", "1P 2m 2M 3m 3M 4P 5d 5P 6m 6M 7m 7M"),
];

/// Alternative scale names: `(alias, canonical name)`.
pub const SCALE_ALIASES: &[(&str, &str)] = &[
    ("pentatonic", "major pentatonic"),
    ("indian", "mixolydian pentatonic"),
    ("chinese", "lydian pentatonic"),
    ("minor seven flat five pentatonic", "locrian pentatonic"),
    ("vietnamese 2", "minor pentatonic"),
    ("kumoi", "flat three pentatonic"),
    ("messiaen's mode #1", "whole tone"),
    ("blues", "minor blues"),
    ("ionian", "major"),
    ("dominant", "mixolydian"),
    ("minor", "aeolian"),
    ("arabian", "locrian major"),
    ("super locrian", "altered"),
    ("diminished whole tone", "altered"),
    ("pomeroy", "altered"),
    ("half-diminished", "locrian #2"),
    ("aeolian b5", "locrian #2"),
    ("melodic minor fifth mode", "mixolydian b6"),
    ("hindu", "mixolydian b6"),
    ("lydian b7", "lydian dominant"),
    ("overtone", "lydian dominant"),
    ("phrygian #6", "dorian b2"),
    ("melodic minor second mode", "dorian b2"),
    ("superlocrian bb7", "ultralocrian"),
    ("superlocrian diminished", "ultralocrian"),
    ("locrian natural 6", "locrian 6"),
    ("locrian sharp 6", "locrian 6"),
    ("ukrainian dorian", "dorian #4"),
    ("romanian minor", "dorian #4"),
    ("altered dorian", "dorian #4"),
    ("spanish", "phrygian dominant"),
    ("phrygian major", "phrygian dominant"),
    ("gypsy", "double harmonic major"),
    ("major #5", "major augmented"),
    ("ionian augmented", "major augmented"),
    ("ionian #5", "major augmented"),
    ("whole-half diminished", "diminished"),
    ("dominant diminished", "half-whole diminished"),
    ("messiaen's mode #2", "half-whole diminished"),
];
