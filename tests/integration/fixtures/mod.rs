// Screenplay fixtures with known outputs
// WHY: Golden-file testing requires deterministic input/output pairs for validation

/// Two scenes, a duplicated heading and a parenthetical cue
pub const DINER_SCRIPT: &str = "\
FADE IN:

INT. DINER - NIGHT

Rain on the windows. SAM wipes the counter.

                    SAM
          Coffee?

                    RITA
          Black.

                    SAM
          Anything else?

                    LOU
          Pie.

INT. DINER - NIGHT
EXT. PARKING LOT - CONTINUOUS

                    RITA
          Keys.

                    LOU (CONT'D)
          Here.

                    RITA
          Thanks.
";

pub const DINER_NAMES_EXPECTED: &str = "\
LOU
RITA
SAM";

/// Scene 1: SAM RITA SAM LOU -> direct RITA-SAM x2, LOU-SAM x1; indirect LOU-RITA x1
/// Scene 2: RITA LOU(CONT'D) RITA -> direct LOU(CONT'D)-RITA x2
pub const DINER_INTERACTIONS_EXPECTED: &str = "\
character1\tcharacter2\tdirect\tindirect
LOU\tRITA\t0\t1
LOU\tSAM\t1\t0
LOU (CONT'D)\tRITA\t2\t0
RITA\tSAM\t2\t0";

pub const DINER_COMPLEXITY_EXPECTED: &str = "\
scene\tappearances
SCENE1\t4
SCENE2\t3";

/// Cues before the first heading, then a single scene
pub const PRELUDE_SCRIPT: &str = "\
NARRATOR
Once upon a time.
HOST
Welcome.
INT. STUDIO - DAY
ANN
Hi.
BEN
Hello.
";

/// Converted text with Windows line endings and no headings at all
pub const NO_SCENES_SCRIPT: &str = "ALICE\r\nHello.\r\nBOB\r\nHi.\r\n";
