//! Chord types, grouped roughly by family. Symbols in the alias table
//! follow common lead-sheet spellings.

/// Built-in chord types: `(name, intervals)`.
pub const CHORDS: &[(&str, &str)] = &[
    // major
    ("major", "1P 3M 5P"),
    ("major seventh", "1P 3M 5P 7M"),
    ("major ninth", "1P 3M 5P 7M 9M"),
    ("major thirteenth", "1P 3M 5P 7M 9M 13M"),
    ("sixth", "1P 3M 5P 6M"),
    ("sixth added ninth", "1P 3M 5P 6M 9M"),
    ("major seventh flat sixth", "1P 3M 6m 7M"),
    ("major seventh sharp eleventh", "1P 3M 5P 7M 11A"),
    // minor
    ("minor", "1P 3m 5P"),
    ("minor seventh", "1P 3m 5P 7m"),
    ("minor/major seventh", "1P 3m 5P 7M"),
    ("minor sixth", "1P 3m 5P 6M"),
    ("minor ninth", "1P 3m 5P 7m 9M"),
    ("minor/major ninth", "1P 3m 5P 7M 9M"),
    ("minor eleventh", "1P 3m 5P 7m 9M 11P"),
    ("minor thirteenth", "1P 3m 5P 7m 9M 13M"),
    // diminished
    ("diminished", "1P 3m 5d"),
    ("diminished seventh", "1P 3m 5d 7d"),
    ("half-diminished", "1P 3m 5d 7m"),
    // dominant
    ("dominant seventh", "1P 3M 5P 7m"),
    ("dominant ninth", "1P 3M 5P 7m 9M"),
    ("dominant thirteenth", "1P 3M 5P 7m 9M 13M"),
    ("lydian dominant seventh", "1P 3M 5P 7m 11A"),
    ("dominant flat ninth", "1P 3M 5P 7m 9m"),
    ("dominant sharp ninth", "1P 3M 5P 7m 9A"),
    ("altered", "1P 3M 7m 9m"),
    // suspended
    ("suspended fourth", "1P 4P 5P"),
    ("suspended second", "1P 2M 5P"),
    ("suspended fourth seventh", "1P 4P 5P 7m"),
    ("eleventh", "1P 5P 7m 9M 11P"),
    ("suspended fourth flat ninth", "1P 4P 5P 7m 9m"),
    // other
    ("fifth", "1P 5P"),
    ("augmented", "1P 3M 5A"),
    ("minor augmented", "1P 3m 5A"),
    ("augmented seventh", "1P 3M 5A 7M"),
    ("major sharp eleventh (lydian)", "1P 3M 5P 7M 9M 11A"),
    // less common names, keyed by symbol
    ("sus24", "1P 2M 4P 5P"),
    ("maj9#5", "1P 3M 5A 7M 9M"),
    ("7#5", "1P 3M 5A 7m"),
    ("7#5#9", "1P 3M 5A 7m 9A"),
    ("9#5", "1P 3M 5A 7m 9M"),
    ("9#5#11", "1P 3M 5A 7m 9M 11A"),
    ("7#5b9", "1P 3M 5A 7m 9m"),
    ("7#5b9#11", "1P 3M 5A 7m 9m 11A"),
    ("+add#9", "1P 3M 5A 9A"),
    ("M#5add9", "1P 3M 5A 9M"),
    ("M6#11", "1P 3M 5P 6M 11A"),
    ("M7add13", "1P 3M 5P 6M 7M 9M"),
    ("69#11", "1P 3M 5P 6M 9M 11A"),
    ("m69", "1P 3m 5P 6M 9M"),
    ("7b6", "1P 3M 5P 6m 7m"),
    ("maj7#9#11", "1P 3M 5P 7M 9A 11A"),
    ("M13#11", "1P 3M 5P 7M 9M 11A 13M"),
    ("M7b9", "1P 3M 5P 7M 9m"),
    ("7#11b13", "1P 3M 5P 7m 11A 13m"),
    ("7add6", "1P 3M 5P 7m 13M"),
    ("7#9#11", "1P 3M 5P 7m 9A 11A"),
    ("13#9#11", "1P 3M 5P 7m 9A 11A 13M"),
    ("7#9#11b13", "1P 3M 5P 7m 9A 11A 13m"),
    ("13#9", "1P 3M 5P 7m 9A 13M"),
    ("7#9b13", "1P 3M 5P 7m 9A 13m"),
    ("9#11", "1P 3M 5P 7m 9M 11A"),
    ("13#11", "1P 3M 5P 7m 9M 11A 13M"),
    ("9#11b13", "1P 3M 5P 7m 9M 11A 13m"),
    ("7b9#11", "1P 3M 5P 7m 9m 11A"),
    ("13b9#11", "1P 3M 5P 7m 9m 11A 13M"),
    ("13b9", "1P 3M 5P 7m 9m 13M"),
    ("7b9b13", "1P 3M 5P 7m 9m 13m"),
    ("7b9#9", "1P 3M 5P 7m 9m 9A"),
    ("Madd9", "1P 3M 5P 9M"),
    ("Maddb9", "1P 3M 5P 9m"),
    ("Mb5", "1P 3M 5d"),
    ("13b5", "1P 3M 5d 6M 7m 9M"),
    ("M7b5", "1P 3M 5d 7M"),
    ("M9b5", "1P 3M 5d 7M 9M"),
    ("7b5", "1P 3M 5d 7m"),
    ("9b5", "1P 3M 5d 7m 9M"),
    ("7no5", "1P 3M 7m"),
    ("7b13", "1P 3M 7m 13m"),
    ("9no5", "1P 3M 7m 9M"),
    ("13no5", "1P 3M 7m 9M 13M"),
    ("9b13", "1P 3M 7m 9M 13m"),
    ("madd4", "1P 3m 4P 5P"),
    ("mMaj7b6", "1P 3m 5P 6m 7M"),
    ("mMaj9b6", "1P 3m 5P 6m 7M 9M"),
    ("m7add11", "1P 3m 5P 7m 11P"),
    ("madd9", "1P 3m 5P 9M"),
    ("o7M7", "1P 3m 5d 6M 7M"),
    ("oM7", "1P 3m 5d 7M"),
    ("mb6M7", "1P 3m 6m 7M"),
    ("m7#5", "1P 3m 6m 7m"),
    ("m9#5", "1P 3m 6m 7m 9M"),
    ("m11A", "1P 3m 5A 7m 9M 11P"),
    ("mb6b9", "1P 3m 6m 9m"),
    ("m9b5", "1P 2M 3m 5d 7m"),
    ("M7#5sus4", "1P 4P 5A 7M"),
    ("M9#5sus4", "1P 4P 5A 7M 9M"),
    ("7#5sus4", "1P 4P 5A 7m"),
    ("M7sus4", "1P 4P 5P 7M"),
    ("M9sus4", "1P 4P 5P 7M 9M"),
    ("9sus4", "1P 4P 5P 7m 9M"),
    ("13sus4", "1P 4P 5P 7m 9M 13M"),
    ("7sus4b9b13", "1P 4P 5P 7m 9m 13m"),
    ("4", "1P 4P 7m 10m"),
    ("11b9", "1P 5P 7m 9m 11P"),
];

/// Alternative chord names: `(alias, canonical name)`.
pub const CHORD_ALIASES: &[(&str, &str)] = &[
    ("M", "major"),
    ("^", "major"),
    ("maj", "major"),
    ("maj7", "major seventh"),
    ("Δ", "major seventh"),
    ("ma7", "major seventh"),
    ("M7", "major seventh"),
    ("Maj7", "major seventh"),
    ("^7", "major seventh"),
    ("maj9", "major ninth"),
    ("Δ9", "major ninth"),
    ("^9", "major ninth"),
    ("maj13", "major thirteenth"),
    ("Maj13", "major thirteenth"),
    ("^13", "major thirteenth"),
    ("6", "sixth"),
    ("add6", "sixth"),
    ("add13", "sixth"),
    ("M6", "sixth"),
    ("6add9", "sixth added ninth"),
    ("6/9", "sixth added ninth"),
    ("69", "sixth added ninth"),
    ("M69", "sixth added ninth"),
    ("M7b6", "major seventh flat sixth"),
    ("^7b6", "major seventh flat sixth"),
    ("maj#4", "major seventh sharp eleventh"),
    ("Δ#4", "major seventh sharp eleventh"),
    ("Δ#11", "major seventh sharp eleventh"),
    ("M7#11", "major seventh sharp eleventh"),
    ("^7#11", "major seventh sharp eleventh"),
    ("maj7#11", "major seventh sharp eleventh"),
    ("m", "minor"),
    ("min", "minor"),
    ("-", "minor"),
    ("m7", "minor seventh"),
    ("min7", "minor seventh"),
    ("mi7", "minor seventh"),
    ("-7", "minor seventh"),
    ("m/ma7", "minor/major seventh"),
    ("m/maj7", "minor/major seventh"),
    ("mM7", "minor/major seventh"),
    ("mMaj7", "minor/major seventh"),
    ("m/M7", "minor/major seventh"),
    ("-Δ7", "minor/major seventh"),
    ("mΔ", "minor/major seventh"),
    ("-^7", "minor/major seventh"),
    ("-maj7", "minor/major seventh"),
    ("m6", "minor sixth"),
    ("-6", "minor sixth"),
    ("m9", "minor ninth"),
    ("-9", "minor ninth"),
    ("mM9", "minor/major ninth"),
    ("mMaj9", "minor/major ninth"),
    ("-^9", "minor/major ninth"),
    ("m11", "minor eleventh"),
    ("-11", "minor eleventh"),
    ("m13", "minor thirteenth"),
    ("-13", "minor thirteenth"),
    ("dim", "diminished"),
    ("°", "diminished"),
    ("o", "diminished"),
    ("dim7", "diminished seventh"),
    ("°7", "diminished seventh"),
    ("o7", "diminished seventh"),
    ("m7b5", "half-diminished"),
    ("ø", "half-diminished"),
    ("-7b5", "half-diminished"),
    ("h7", "half-diminished"),
    ("h", "half-diminished"),
    ("7", "dominant seventh"),
    ("dom", "dominant seventh"),
    ("9", "dominant ninth"),
    ("13", "dominant thirteenth"),
    ("7#11", "lydian dominant seventh"),
    ("7#4", "lydian dominant seventh"),
    ("7b9", "dominant flat ninth"),
    ("7#9", "dominant sharp ninth"),
    ("alt7", "altered"),
    ("sus4", "suspended fourth"),
    ("sus", "suspended fourth"),
    ("sus2", "suspended second"),
    ("7sus4", "suspended fourth seventh"),
    ("7sus", "suspended fourth seventh"),
    ("11", "eleventh"),
    ("b9sus", "suspended fourth flat ninth"),
    ("phryg", "suspended fourth flat ninth"),
    ("7b9sus", "suspended fourth flat ninth"),
    ("7b9sus4", "suspended fourth flat ninth"),
    ("5", "fifth"),
    ("aug", "augmented"),
    ("+", "augmented"),
    ("+5", "augmented"),
    ("^#5", "augmented"),
    ("m#5", "minor augmented"),
    ("-#5", "minor augmented"),
    ("m+", "minor augmented"),
    ("maj7#5", "augmented seventh"),
    ("maj7+5", "augmented seventh"),
    ("+maj7", "augmented seventh"),
    ("^7#5", "augmented seventh"),
    ("maj9#11", "major sharp eleventh (lydian)"),
    ("Δ9#11", "major sharp eleventh (lydian)"),
    ("^9#11", "major sharp eleventh (lydian)"),
    ("sus4add9", "sus24"),
    ("Maj9#5", "maj9#5"),
    ("+7", "7#5"),
    ("7+", "7#5"),
    ("7aug", "7#5"),
    ("aug7", "7#5"),
    ("7#9#5", "7#5#9"),
    ("9+", "9#5"),
    ("7b9#5", "7#5b9"),
    ("+add9", "M#5add9"),
    ("M6b5", "M6#11"),
    ("6#11", "M6#11"),
    ("6b5", "M6#11"),
    ("-69", "m69"),
    ("maj13#11", "M13#11"),
    ("M13+4", "M13#11"),
    ("M13#4", "M13#11"),
    ("7b5b13", "7#11b13"),
    ("67", "7add6"),
    ("7add13", "7add6"),
    ("7b5#9", "7#9#11"),
    ("7#9b5", "7#9#11"),
    ("9+4", "9#11"),
    ("9#4", "9#11"),
    ("13+4", "13#11"),
    ("13#4", "13#11"),
    ("9b5b13", "9#11b13"),
    ("7b5b9", "7b9#11"),
    ("7b9b5", "7b9#11"),
    ("2", "Madd9"),
    ("add9", "Madd9"),
    ("add2", "Madd9"),
    ("m7add4", "m7add11"),
    ("9sus", "9sus4"),
    ("13sus", "13sus4"),
    ("7b9b13sus4", "7sus4b9b13"),
    ("quartal", "4"),
];
