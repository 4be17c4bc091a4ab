use clustermgmt_model_core::resource;

use crate::{Ingress, MonitoringStack};

resource! {
    /// An OpenShift cluster.
    pub class Cluster("Cluster") {
        /// Name unique among the clusters of its owner.
        name: string = "name",
        /// Whether the cluster runs on infrastructure owned by the service.
        managed: boolean = "managed",
        /// Whether nodes are spread over several availability zones.
        multi_az: boolean = "multi_az",
        /// Load balancers the cluster may create.
        load_balancer_quota: integer = "load_balancer_quota",
        monitoring_stack: object(MonitoringStack) = "monitoring_stack",
        /// Routers of the cluster.
        ingresses: list(Ingress) = "ingresses",
    }
}
