use stoat_kb::context::Context;

use crate::CliOptions;

/// Strips recognised flags from the argument list, revising the context and options to match.
///
/// Remaining arguments are goal literals followed by the path to a clause file.
pub fn parse_args(ctx: &mut Context, args: &mut Vec<String>, options: &mut CliOptions) {
    args.retain(|arg| match arg.as_str() {
        "--chain" => {
            options.chain = true;
            false
        }

        "--no-preprocessing" => {
            ctx.config.preprocessing.value = false;
            false
        }

        _ => true,
    });
}
