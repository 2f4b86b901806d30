#![allow(dead_code)]

use wagonwheel::dataset::{bowling_type_for, ArrivalPoint, DeliveryRecord, FieldPosition};

/// Builder for DeliveryRecord to keep test tables short
pub struct DeliveryBuilder {
    rec: DeliveryRecord,
}

impl DeliveryBuilder {
    pub fn new(runs: u32) -> Self {
        Self {
            rec: DeliveryRecord {
                batting_team: "Lions".to_string(),
                batter: "A Smith".to_string(),
                bowler_type: "RFM".to_string(),
                bowling_type: bowling_type_for("RFM"),
                runs,
                extra: None,
                wicket: None,
                field: None,
                arrival: None,
            },
        }
    }

    pub fn team(mut self, team: &str) -> Self {
        self.rec.batting_team = team.to_string();
        self
    }

    pub fn batter(mut self, batter: &str) -> Self {
        self.rec.batter = batter.to_string();
        self
    }

    pub fn bowler(mut self, code: &str) -> Self {
        self.rec.bowler_type = code.to_string();
        self.rec.bowling_type = bowling_type_for(code);
        self
    }

    pub fn extra(mut self, extra: &str) -> Self {
        self.rec.extra = Some(extra.to_string());
        self
    }

    pub fn wicket(mut self, wicket: &str) -> Self {
        self.rec.wicket = Some(wicket.to_string());
        self
    }

    pub fn field(mut self, x: f64, y: f64) -> Self {
        self.rec.field = Some(FieldPosition { x, y });
        self
    }

    pub fn arrival(mut self, line: f64, height: f64) -> Self {
        self.rec.arrival = Some(ArrivalPoint { line, height });
        self
    }

    pub fn build(self) -> DeliveryRecord {
        self.rec
    }
}

pub const CSV_HEADER: &str = "Batting Team,Batter,Bowler Type,Runs,Extra,Wicket,FieldX,FieldY,Analyst Arrival Line,Analyst Arrival Height";

/// Small mixed match: two teams, three batters, spin and pace, a couple of wickets.
pub fn sample_csv() -> String {
    let rows = [
        "Lions,A Smith,RFM,4,,,200,150,0.1,0.8",
        "Lions,A Smith,ROB,6,,,120,20,-0.2,1.1",
        "Lions,A Smith,RFM,0,,Caught,100,200,0.3,1.4",
        "Lions,A Smith,LM,1,Wide,,,,,",
        "Lions,B Jones,LLB,2,,,250,175,,",
        "Lions,B Jones,RF,0,,Bowled,,,0.0,0.3",
        "Tigers,C Brown,SLA,3,,,175,100,,",
        "Tigers,C Brown,LFM,0,,Retired Hurt,,,,",
    ];
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for r in rows {
        out.push_str(r);
        out.push('\n');
    }
    out
}
