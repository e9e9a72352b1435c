/*!
# Commands

Every command may be shortened to its first letter.
*/

#[path = "commands/ask.rs"]
#[allow(non_snake_case)]
pub mod ASK;

#[path = "commands/comment.rs"]
#[allow(non_snake_case)]
pub mod COMMENT;

#[path = "commands/do.rs"]
#[allow(non_snake_case)]
pub mod DO;

#[path = "commands/erase.rs"]
#[allow(non_snake_case)]
pub mod ERASE;

#[path = "commands/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "commands/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "commands/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "commands/quit.rs"]
#[allow(non_snake_case)]
pub mod QUIT;

#[path = "commands/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "commands/set.rs"]
#[allow(non_snake_case)]
pub mod SET;

#[path = "commands/type.rs"]
#[allow(non_snake_case)]
pub mod TYPE;
