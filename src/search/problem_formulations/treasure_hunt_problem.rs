use crate::search::{
    Cost, Heuristic, Landmark, SearchProblem, TreasureHunt, TreasureState,
};

impl SearchProblem for TreasureHunt {
    type State = TreasureState;

    fn initial_state(&self) -> TreasureState {
        self.start_state()
    }

    fn is_goal(&self, state: &TreasureState) -> bool {
        TreasureHunt::is_goal(self, state)
    }

    fn successors(&self, state: &TreasureState) -> Vec<(TreasureState, Cost)> {
        let key = self.landmark(Landmark::Key);
        let chest = self.landmark(Landmark::Chest);
        self.grid()
            .neighbours(state.position)
            .filter_map(|next| {
                // Lava has no cost and is never entered.
                let cost = self.grid().get(next)?.cost()?;
                Some((state.step_to(next, key, chest), cost))
            })
            .collect()
    }

    fn heuristic(&self, state: &TreasureState) -> Cost {
        self.treasure_heuristic().evaluate(state)
    }
}
