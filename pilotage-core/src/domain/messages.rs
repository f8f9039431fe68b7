use super::Phase;
use crate::format_display;

/// Parallel English/Chinese narrative for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilingualText {
    pub english: String,
    pub chinese: String,
}

/// Renders a phase into its narrative pair. The mapping is closed: `Phase`
/// enumerates every row of the rule tables, so there is no missing-template
/// path. Wording and spacing reproduce the source system verbatim; the
/// completion message is shared between the arriving and between-anchorages
/// directions.
pub fn render(phase: &Phase) -> BilingualText {
    match phase {
        Phase::ReachedAnchorage { to, ended_at } => {
            let time = format_display(Some(*ended_at));
            BilingualText {
                english: format!(
                    "Vessel has arrived at anchor ({to}) at {time}. Will reach the berth in about 30 minutes."
                ),
                chinese: format!("船舶已在 {time} 到达锚地 ({to}) 。将在约30分钟后到达泊位。"),
            }
        }
        Phase::AtBoardingGround {
            from,
            to,
            arrived_at,
            eta,
        } => {
            let arrival = format_display(Some(*arrived_at));
            let estimated = format_display(*eta);
            BilingualText {
                english: format!(
                    "Vessel is at Pilot Boarding Ground ({from}) since {arrival}. Estimated arrival at anchor ({to}) by {estimated}."
                ),
                chinese: format!(
                    "船舶在引航员登船地点 ({from}) 自 {arrival}。预计到达锚地 ({to}) 在 {estimated}。"
                ),
            }
        }
        Phase::PilotBoarded {
            to,
            onboard_at,
            eta,
        } => {
            let onboard = format_display(Some(*onboard_at));
            let estimated = format_display(Some(*eta));
            BilingualText {
                english: format!(
                    "Pilot has boarded the vessel at {onboard}. Estimated arrival at anchor ({to}) by {estimated}."
                ),
                chinese: format!("引航员已登船在 {onboard}。预计在 {estimated}到达锚地 ({to})。"),
            }
        }
        Phase::PilotageStarted {
            to,
            started_at,
            eta,
        } => {
            let started = format_display(Some(*started_at));
            let estimated = format_display(Some(*eta));
            BilingualText {
                english: format!(
                    "Pilotage service started at {started}. Estimated arrival at anchor ({to}) by {estimated}."
                ),
                chinese: format!("引航服务已在 {started}时开始。预计在 {estimated}到达锚地 ({to})。"),
            }
        }
        Phase::LeftAnchorage { from, left_at } => {
            let left = format_display(Some(*left_at));
            BilingualText {
                english: format!(
                    "Vessel has left the anchor ({from}) at {left}. No more loading/unloading is possible."
                ),
                chinese: format!("船舶已在 {left}时离开锚地 ({from})。无法再进行装卸。"),
            }
        }
        Phase::AtAnchorage { from, departing_at } => {
            let departure = format_display(*departing_at);
            BilingualText {
                english: format!(
                    "Vessel is at anchor ({from}). Estimated departure at {departure}."
                ),
                chinese: format!("船舶在锚地 ({from})。预计在 {departure}离港。"),
            }
        }
        Phase::Transit {
            from,
            to,
            stage,
            at,
            eta,
        } => {
            let time = format_display(Some(*at));
            let estimated = format_display(Some(*eta));
            BilingualText {
                english: format!(
                    "Vessel is moving between anchors from ({from}) to ({to}). {stage} at {time}. Estimated arrival at {estimated}.",
                    stage = stage.english(),
                ),
                chinese: format!(
                    "船舶正在从锚地 ({from}) 移动到锚地 ({to})。{stage}在 {time}。预计在 {estimated} 到达。",
                    stage = stage.chinese(),
                ),
            }
        }
        Phase::Unknown => BilingualText {
            english: "Unknown status.".into(),
            chinese: "未知状态。".into(),
        },
    }
}
