use clustermgmt_model_core::resource;

resource! {
    /// Amount of one compute resource granted to the monitoring stack.
    pub struct MonitoringStackResource("MonitoringStackResource") {
        /// CPU quantity, for example `500m`.
        cpu: string = "cpu",
        /// Memory quantity, for example `512Mi`.
        memory: string = "memory",
    }
}

resource! {
    /// Limits and requests of the monitoring stack.
    pub struct MonitoringStackResources("MonitoringStackResources") {
        limits: object(MonitoringStackResource) = "limits",
        requests: object(MonitoringStackResource) = "requests",
    }
}

resource! {
    /// Settings of the cluster monitoring stack.
    pub struct MonitoringStack("MonitoringStack") {
        /// Whether the monitoring stack is deployed.
        enabled: boolean = "enabled",
        resources: object(MonitoringStackResources) = "resources",
    }
}
