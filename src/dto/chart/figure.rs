use crate::dto::chart::bar_panel::*;
use crate::model::topology::topology_layout::*;

pub const DASHBOARD_GRID: (usize, usize) = (2, 3);

#[doc = "한 장의 이미지로 그려질 그림 전체. 그리기 백엔드와 독립적인 순수 데이터."]
#[derive(Debug, Clone)]
pub enum Figure {
    SingleTier(BarPanel),
    Dashboard {
        title: String,
        /* every grid cell except the last */
        panels: Vec<BarPanel>,
        topology: TopologyLayout,
    },
}

impl Figure {
    pub fn panel_count(&self) -> usize {
        match self {
            Figure::SingleTier(_) => 1,
            Figure::Dashboard { panels, .. } => panels.len() + 1,
        }
    }
}
