use anyhow::bail;
use gw_core::ReportType;
use gw_session::{FileMediaCapture, MediaCapture, ReportDesk, ReportDraft};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::report::ReportSubmitArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(
    args: &ReportSubmitArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let staff = ctx.session.require_staff()?.clone();
    let report_type = parse_enum::<ReportType>(&args.report_type, "report type")?;

    let mut draft = ReportDraft::new(report_type, args.title.as_str());
    if let Some(description) = &args.description {
        draft = draft.with_description(description.as_str());
    }
    match (report_type.required_media(), &args.media) {
        (Some(kind), Some(path)) => {
            let clip = FileMediaCapture.capture(kind, path)?;
            tracing::debug!(path = %clip.path.display(), bytes = clip.bytes, "media attached");
            draft = draft.with_media(clip);
        }
        (None, Some(_)) => bail!("{report_type} reports do not take media"),
        _ => {}
    }
    draft.validate()?;

    let spinner = Progress::spinner("Filing report...");
    let location = ctx.session.locate_for_report().await;
    let mut desk = ReportDesk::new();
    let result = desk
        .submit(ctx.session.api(), &staff, &draft, location)
        .await;
    spinner.settle(&result, "report not filed");
    output(result?, flags.format)
}
