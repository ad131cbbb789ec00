mod test_plans;
